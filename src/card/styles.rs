//! Card stylesheet
//!
//! Static styling for the card, expressed entirely in design-token variables.
//! The accent bar's per-instance color is not part of this sheet; see
//! [`super::style`].

use serde::{Deserialize, Serialize};

/// Host sizing metrics
///
/// Two sizing variants of the card exist and neither is canonical, so hosts
/// choose one explicitly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardSizing {
    /// 450x600px box
    #[default]
    Fixed,
    /// Full width up to 450px, natural height
    Fluid,
}

impl CardSizing {
    fn host_metrics(self) -> &'static str {
        match self {
            CardSizing::Fixed => "width: 450px; height: 600px;",
            CardSizing::Fluid => "width: 100%; max-width: 450px; height: auto;",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CardSizing::Fixed => "fixed",
            CardSizing::Fluid => "fluid",
        }
    }
}

const HOST_RULE: &str = "display: inline-block; \
color: var(--ddd-theme-primary); \
font-family: var(--ddd-font-navigation); \
overflow: hidden; \
background-color: var(--ddd-theme-default-white); \
border-radius: var(--ddd-radius-sm);";

const CARD_RULES: &str = r#"
.card {
  display: flex;
  flex-direction: column;
  border-radius: var(--ddd-radius-sm);
  width: 100%;
  height: 100%;
  overflow: hidden;
  background: var(--ddd-theme-default-white);
}
.content {
  display: flex;
  flex-direction: column;
  flex-grow: 1;
  justify-content: space-between;
  padding: var(--ddd-spacing-4);
  overflow: hidden;
}
.title {
  font-weight: var(--ddd-font-weight-bold);
  font-size: var(--ddd-font-size-m);
  color: var(--ddd-primary-2);
  margin: var(--ddd-spacing-1) var(--ddd-spacing-0);
  text-align: left;
}
.image {
  position: relative;
  width: 100%;
  overflow: hidden;
}
.image img {
  width: 100%;
  height: 100%;
  display: block;
}
.bar {
  position: absolute;
  bottom: var(--ddd-spacing-0);
  width: 100%;
  height: 10px;
  background-color: var(--ddd-primary-2);
}
.desc {
  display: flex;
  flex-direction: column;
  flex-grow: 1;
  font-size: var(--ddd-font-size-3xs);
  color: var(--ddd-primary-2);
  line-height: 1.4;
  margin-bottom: var(--ddd-spacing-4);
  text-align: left;
}
.link {
  display: block;
  text-align: center;
  padding: var(--ddd-spacing-2) var(--ddd-spacing-3);
  margin: var(--ddd-spacing-2) var(--ddd-spacing-0);
  font-weight: var(--ddd-font-weight-bold);
  background-color: var(--ddd-primary-1);
  color: var(--ddd-theme-default-white);
  border: var(--ddd-border-sm);
  border-color: var(--ddd-primary-2);
  border-radius: var(--ddd-radius-sm);
  transition: background-color 0.2s ease-in-out;
  flex-shrink: 0;
}
.link a {
  display: block;
  padding: inherit;
  color: inherit;
  text-decoration: none;
}
.link:hover {
  background-color: var(--ddd-primary-2);
}
"#;

/// Full stylesheet with every rule scoped under `host_selector`
pub fn stylesheet(host_selector: &str, sizing: CardSizing) -> String {
    format!(
        "{} {{ {} {} }}{}",
        host_selector,
        HOST_RULE,
        sizing.host_metrics(),
        CARD_RULES.replace("\n.", &format!("\n{} .", host_selector))
    )
}
