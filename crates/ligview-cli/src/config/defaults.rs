pub const DEFAULT_URL_TEMPLATE: &str = "https://files.rcsb.org/ligands/view/{id}_model.pdb";

pub struct DefaultsConfig {
    pub url_template: String,
    pub timeout_seconds: u64,
    pub list_atoms: bool,
    pub list_bonds: bool,
    pub show_diagnostics: bool,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            url_template: DEFAULT_URL_TEMPLATE.to_string(),
            timeout_seconds: 30,
            list_atoms: false,
            list_bonds: false,
            show_diagnostics: true,
        }
    }
}
