//! List registered keys

use anyhow::Result;
use blueprint::registry::{Category, TemplateRegistry};
use console::style;

const SECTIONS: [(&str, Category); 5] = [
    ("Frameworks", Category::Framework),
    ("Database drivers", Category::Database),
    ("Features", Category::Feature),
    ("Frontends", Category::Frontend),
    ("Build tools", Category::BuildTool),
];

/// Print every key accepted by `blueprint create`
pub struct ListCommand<'a> {
    registry: &'a TemplateRegistry,
}

impl<'a> ListCommand<'a> {
    /// List the keys of `registry`
    #[must_use]
    pub const fn new(registry: &'a TemplateRegistry) -> Self {
        Self { registry }
    }

    /// Keys grouped by section title
    #[must_use]
    pub fn sections(&self) -> Vec<(&'static str, Vec<String>)> {
        SECTIONS
            .iter()
            .map(|(title, category)| (*title, self.registry.keys(*category)))
            .collect()
    }

    /// Execute the command
    ///
    /// # Errors
    ///
    /// Never fails; returns `Result` so `main` can dispatch uniformly.
    pub fn execute(&self) -> Result<()> {
        for (title, keys) in self.sections() {
            println!("{}", style(title).bold());
            for key in keys {
                println!("  {}", style(key).cyan());
            }
            println!();
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blueprint::options::Framework;
    use blueprint::registry::{TemplateKey, TemplateRegistryBuilder};

    #[test]
    fn test_sections_cover_bundled_keys() {
        let sections = ListCommand::new(TemplateRegistry::global()).sections();
        assert_eq!(sections.len(), 5);
        let (title, frameworks) = &sections[0];
        assert_eq!(*title, "Frameworks");
        assert_eq!(frameworks, &Framework::keys());
        assert!(sections[2].1.contains(&"websocket".to_string()));
    }

    #[test]
    fn test_sections_follow_registry() {
        let registry = TemplateRegistryBuilder::from(TemplateRegistry::global().clone())
            .without(&TemplateKey::Framework(Framework::Echo))
            .build();
        let sections = ListCommand::new(&registry).sections();
        assert!(!sections[0].1.contains(&"echo".to_string()));
    }
}
