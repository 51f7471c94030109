//! Best-effort recovery of JSON records from a model's free-text reply.
//!
//! Models wrap their JSON in prose or markdown fences, and sometimes emit more
//! than one block. Nothing in here returns an error: a reply with nothing
//! usable yields [`Extraction::Empty`].

use std::sync::LazyLock;

use regex::Regex;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

static ARRAY_SPAN: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"(?s)\[.*\]").ok());
static OBJECT_SPAN: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"(?s)\{.*\}").ok());

#[derive(Debug, Clone, PartialEq)]
pub enum Extraction {
    Empty,
    Single(Value),
    Many(Vec<Value>),
}

impl Extraction {
    pub fn from_reply(reply: Option<&str>) -> Self {
        let Some(text) = reply.map(str::trim).filter(|t| !t.is_empty()) else {
            return Extraction::Empty;
        };

        // The delimiter that opens first decides the shape.
        let array_first = match (text.find('['), text.find('{')) {
            (Some(array), Some(object)) => array < object,
            (_, object) => object.is_none(),
        };
        let parsed = if array_first {
            recover(text, &ARRAY_SPAN, '[').or_else(|| recover(text, &OBJECT_SPAN, '{'))
        } else {
            recover(text, &OBJECT_SPAN, '{').or_else(|| recover(text, &ARRAY_SPAN, '['))
        };

        match parsed {
            Some(Value::Array(items)) => Extraction::Many(items),
            Some(value @ Value::Object(_)) => Extraction::Single(value),
            _ => Extraction::Empty,
        }
    }

    pub fn into_records(self) -> Vec<Value> {
        match self {
            Extraction::Empty => Vec::new(),
            Extraction::Single(value) => vec![value],
            Extraction::Many(values) => values,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Extraction::Empty)
    }
}

/// Greedy span first, then the first complete value starting at the opening
/// delimiter with any trailing text ignored.
fn recover(text: &str, span: &LazyLock<Option<Regex>>, open: char) -> Option<Value> {
    if let Some(re) = span.as_ref()
        && let Some(found) = re.find(text)
        && let Ok(value) = serde_json::from_str::<Value>(found.as_str())
    {
        return Some(value);
    }

    let start = text.find(open)?;
    serde_json::Deserializer::from_str(&text[start..])
        .into_iter::<Value>()
        .next()
        .and_then(Result::ok)
}

/// Extracts and deserializes every record, dropping the ones that do not fit `T`.
pub fn extract_records<T: DeserializeOwned>(reply: Option<&str>) -> Vec<T> {
    let extraction = Extraction::from_reply(reply);
    if extraction.is_empty() {
        warn!(
            reply_len = reply.map(str::len).unwrap_or_default(),
            "no JSON records found in completion reply"
        );
        return Vec::new();
    }

    extraction
        .into_records()
        .into_iter()
        .filter_map(|record| match serde_json::from_value::<T>(record) {
            Ok(parsed) => Some(parsed),
            Err(e) => {
                warn!(error = %e, "dropping malformed record from completion reply");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::domain::suggestion::entities::RecipeSuggestion;

    #[test]
    fn blank_reply_is_empty() {
        assert_eq!(Extraction::from_reply(None), Extraction::Empty);
        assert_eq!(Extraction::from_reply(Some("   \n")), Extraction::Empty);
    }

    #[test]
    fn array_inside_markdown_fence() {
        let reply = "Claro! Aqui estão:\n```json\n[{\"nome\": \"A\"}, {\"nome\": \"B\"}]\n```";
        assert_eq!(
            Extraction::from_reply(Some(reply)),
            Extraction::Many(vec![json!({"nome": "A"}), json!({"nome": "B"})])
        );
    }

    #[test]
    fn first_array_wins_when_reply_holds_several() {
        let reply = r#"[{"nome": "A"}] e também [{"nome": "B"}]"#;
        assert_eq!(
            Extraction::from_reply(Some(reply)),
            Extraction::Many(vec![json!({"nome": "A"})])
        );
    }

    #[test]
    fn falls_back_to_a_single_object() {
        let reply = r#"Resultado: {"nome": "Sopa", "ingredientes": "água"} fim"#;
        assert_eq!(
            Extraction::from_reply(Some(reply)),
            Extraction::Single(json!({"nome": "Sopa", "ingredientes": "água"}))
        );
    }

    #[test]
    fn single_object_with_list_fields_stays_whole() {
        let reply = r#"Aqui está: {"nome":"Bolo","ingredientes":["ovo"],"modo_preparo":["misturar"]}"#;

        let extraction = Extraction::from_reply(Some(reply));
        let Extraction::Single(value) = &extraction else {
            panic!("expected a single object, got {extraction:?}");
        };
        assert_eq!(value["nome"], "Bolo");

        let recipes: Vec<RecipeSuggestion> = extract_records(Some(reply));
        assert_eq!(recipes.len(), 1);
        assert_eq!(recipes[0].name, "Bolo");
        assert_eq!(recipes[0].ingredients, vec!["ovo"]);
        assert_eq!(recipes[0].steps, vec!["misturar"]);
    }

    #[test]
    fn array_opening_before_objects_is_kept_as_a_list() {
        let reply = r#"Receitas: [{"nome": "A", "ingredientes": ["x"]}]"#;
        assert_eq!(
            Extraction::from_reply(Some(reply)),
            Extraction::Many(vec![json!({"nome": "A", "ingredientes": ["x"]})])
        );
    }

    #[test]
    fn prose_without_json_is_empty() {
        assert!(Extraction::from_reply(Some("Desculpe, não consigo ajudar.")).is_empty());
        assert!(Extraction::from_reply(Some("[isto não é json")).is_empty());
    }

    #[test]
    fn malformed_records_are_dropped() {
        let reply = r#"[{"nome": "Bolo", "ingredientes": ["farinha"]}, {"sem_nome": true}, 42]"#;
        let recipes: Vec<RecipeSuggestion> = extract_records(Some(reply));

        assert_eq!(recipes.len(), 1);
        assert_eq!(recipes[0].name, "Bolo");
        assert_eq!(recipes[0].ingredients, vec!["farinha"]);
    }
}
