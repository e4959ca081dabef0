use crate::data::RootDomains;


pub fn display_root_domains(root_domains: &RootDomains, sorted: bool) -> String {
    let domains: Vec<&str> = if sorted {
        root_domains.sorted()
    } else {
        root_domains.iter().collect()
    };

    domains.join("\n")
}
