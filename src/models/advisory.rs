use serde::{Deserialize, Serialize};

/// A block of advisory bullets, optionally introduced by a heading line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Advisory {
    pub source: String,
    pub heading: Option<String>,
    pub bullets: Vec<String>,
}

impl Advisory {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            heading: None,
            bullets: Vec::new(),
        }
    }

    pub fn with_heading(mut self, heading: impl Into<String>) -> Self {
        self.heading = Some(heading.into());
        self
    }

    pub fn with_bullet(mut self, bullet: impl Into<String>) -> Self {
        self.bullets.push(bullet.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advisory_builder_pattern() {
        let advisory = Advisory::new("rainfall")
            .with_heading("Heavy Rainfall Considerations:")
            .with_bullet("Split nitrogen applications")
            .with_bullet("Ensure good drainage");

        assert_eq!(advisory.source, "rainfall");
        assert_eq!(
            advisory.heading.as_deref(),
            Some("Heavy Rainfall Considerations:")
        );
        assert_eq!(advisory.bullets.len(), 2);
    }
}
