use serde::{
    Serialize,
    Deserialize
};

/// The `name` and optional lookup `codes` every registered JSON object carries.
#[derive(Clone, Serialize, Deserialize)]
pub struct NamedJsonObject {
    name: String,
    #[serde(default)]
    codes: Vec<String>
}

impl NamedJsonObject {
    pub fn new(name: String, codes: Vec<String>) -> NamedJsonObject {
        NamedJsonObject { name, codes }
    }

    pub fn name(&self) -> &String {
        &self.name
    }

    pub fn codes(&self) -> &[String] {
        &self.codes
    }

    /// Keys to register the object under: its codes, or its name when it has none.
    pub fn keys(&self) -> Vec<String> {
        if self.codes.is_empty() {
            vec![self.name.clone()]
        } else {
            self.codes.clone()
        }
    }
}
