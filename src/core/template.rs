//! Template module - Fixed module boilerplate
//!
//! TODO: second template for command classes (src/commands/<Name>.ts) once
//! the bot's command layer is scaffolded by this tool as well

/// Boilerplate for one module, rendered from its name.
///
/// The name is embedded verbatim in both the class declaration and the
/// index re-export, so it has to arrive with the casing the caller wants.
#[derive(Debug)]
pub struct ModuleTemplate {
    name: String,
}

impl ModuleTemplate {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Body of the generated module file
    pub fn class_body(&self) -> String {
        format!(
            "import {{ Module }} from \"./Module\";\n\nexport class {} extends Module {{\n}}\n",
            self.name
        )
    }

    /// Re-export line appended to the index file
    pub fn index_export(&self) -> String {
        format!("export {{ {0} }} from \"./{0}\"\n", self.name)
    }
}
