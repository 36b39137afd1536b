//! Pattern/response tables.
//!
//! A table is an ordered list of categories, each pairing keyword patterns
//! with a pool of canned replies, plus a sentinel default pool used when no
//! pattern matches. Category order and per-category pattern order are part
//! of the matching contract, not incidental.

use serde::{Deserialize, Serialize};

use crate::error::TableError;

// =============================================================================
// Category
// =============================================================================

/// A named group of keyword patterns sharing one pool of candidate replies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Category identifier, e.g. "greetings".
    pub name: String,
    /// Lowercase substrings checked against the input in declared order.
    pub patterns: Vec<String>,
    /// Candidate replies, one of which is picked uniformly at random.
    pub responses: Vec<String>,
}

impl Category {
    /// Build a category from string literals.
    pub fn new(name: &str, patterns: &[&str], responses: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            patterns: patterns.iter().map(|p| p.to_string()).collect(),
            responses: responses.iter().map(|r| r.to_string()).collect(),
        }
    }
}

// =============================================================================
// ResponseTable
// =============================================================================

/// Ordered categories plus the default fallback pool.
///
/// The default pool is never pattern-matched; it only answers inputs that
/// match no category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseTable {
    /// Categories in matching order.
    pub categories: Vec<Category>,
    /// Replies for inputs that match no category.
    pub default_responses: Vec<String>,
}

impl ResponseTable {
    /// The stock tables shipped with the bot, in their declared matching
    /// order.
    pub fn builtin() -> Self {
        Self {
            categories: vec![
                Category::new(
                    "greetings",
                    &[
                        "hello",
                        "hi",
                        "hey",
                        "good morning",
                        "good afternoon",
                        "good evening",
                        "greetings",
                    ],
                    &[
                        "Hello! How can I help you today?",
                        "Hi there! What's on your mind?",
                        "Hey! Nice to meet you!",
                        "Good day! How are you doing?",
                    ],
                ),
                Category::new(
                    "about_bot",
                    &[
                        "who are you",
                        "what are you",
                        "tell me about yourself",
                        "your name",
                    ],
                    &[
                        "I'm ChatBot, your friendly AI assistant! I'm here to chat and help answer questions.",
                        "I'm a simple chatbot created to demonstrate conversational AI. What would you like to know?",
                        "I'm ChatBot! I can help with basic questions and have friendly conversations.",
                    ],
                ),
                Category::new(
                    "how_are_you",
                    &["how are you", "how's it going", "what's up", "how do you feel"],
                    &[
                        "I'm doing great, thanks for asking! How about you?",
                        "I'm functioning perfectly! How's your day going?",
                        "I'm fantastic! Thanks for checking in.",
                    ],
                ),
                Category::new(
                    "help",
                    &["help", "what can you do", "how do you work", "instructions"],
                    &[
                        "I can help with basic questions, have conversations, tell jokes, or share interesting facts. Just type anything!",
                        "You can ask me questions, request jokes, or just chat casually. I'm here to help!",
                        "I'm here to chat! Try asking me about myself, request a joke, or just say hello.",
                    ],
                ),
                Category::new(
                    "jokes",
                    &["joke", "funny", "make me laugh", "humor", "tell me a joke"],
                    &[
                        "Why don't scientists trust atoms? Because they make up everything!",
                        "I told my computer a joke about UDP... I don't know if it got it.",
                        "Why do programmers prefer dark mode? Because light attracts bugs!",
                        "How do you comfort a JavaScript bug? You console it!",
                    ],
                ),
                Category::new(
                    "facts",
                    &["fact", "interesting", "tell me something", "surprise me", "fun fact"],
                    &[
                        "Did you know? Octopuses have three hearts and blue blood!",
                        "Fun fact: A group of flamingos is called a 'flamboyance'!",
                        "Interesting: Honey never spoils - archaeologists have found edible honey in ancient Egyptian tombs!",
                        "Amazing: A single cloud can weigh more than a million pounds!",
                    ],
                ),
                Category::new(
                    "goodbye",
                    &["bye", "goodbye", "see you", "farewell", "exit", "quit"],
                    &[
                        "Goodbye! It was nice chatting with you!",
                        "See you later! Have a great day!",
                        "Bye! Feel free to come back anytime!",
                    ],
                ),
            ],
            default_responses: vec![
                "That's interesting! Tell me more.".to_string(),
                "I'm not sure I understand completely, but I'm listening!".to_string(),
                "Could you elaborate on that?".to_string(),
                "Hmm, that's a good point. What else is on your mind?".to_string(),
                "I see! What would you like to talk about next?".to_string(),
            ],
        }
    }

    /// Parse a response pack from TOML text.
    ///
    /// Category order in the document becomes the matching order.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Check the table invariants.
    ///
    /// Every category needs a non-empty name, at least one pattern, at least
    /// one response, and lowercase non-empty patterns; the default pool must
    /// not be empty. A validated table never fails at lookup time.
    pub fn validate(&self) -> Result<(), TableError> {
        let mut seen = Vec::with_capacity(self.categories.len());
        for (index, category) in self.categories.iter().enumerate() {
            if category.name.trim().is_empty() {
                return Err(TableError::UnnamedCategory(index));
            }
            if seen.contains(&category.name.as_str()) {
                return Err(TableError::DuplicateCategory(category.name.clone()));
            }
            seen.push(category.name.as_str());
            if category.patterns.is_empty() {
                return Err(TableError::EmptyPatterns(category.name.clone()));
            }
            if category.responses.is_empty() {
                return Err(TableError::EmptyResponses(category.name.clone()));
            }
            for pattern in &category.patterns {
                if pattern.trim().is_empty() || *pattern != pattern.to_lowercase() {
                    return Err(TableError::InvalidPattern {
                        category: category.name.clone(),
                        pattern: pattern.clone(),
                    });
                }
            }
        }
        if self.default_responses.is_empty() {
            return Err(TableError::EmptyDefaultPool);
        }
        Ok(())
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_is_valid() {
        assert!(ResponseTable::builtin().validate().is_ok());
    }

    #[test]
    fn test_builtin_category_order() {
        let table = ResponseTable::builtin();
        let names: Vec<&str> = table
            .categories
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(
            names,
            vec![
                "greetings",
                "about_bot",
                "how_are_you",
                "help",
                "jokes",
                "facts",
                "goodbye"
            ]
        );
    }

    #[test]
    fn test_builtin_pattern_order_within_category() {
        let table = ResponseTable::builtin();
        let greetings = &table.categories[0];
        assert_eq!(greetings.patterns[0], "hello");
        assert_eq!(greetings.patterns[1], "hi");
        assert_eq!(greetings.patterns.last().unwrap(), "greetings");
    }

    #[test]
    fn test_builtin_default_pool_size() {
        assert_eq!(ResponseTable::builtin().default_responses.len(), 5);
    }

    #[test]
    fn test_validate_rejects_empty_responses() {
        let table = ResponseTable {
            categories: vec![Category::new("jokes", &["joke"], &[])],
            default_responses: vec!["Hmm.".to_string()],
        };
        assert!(matches!(
            table.validate(),
            Err(TableError::EmptyResponses(name)) if name == "jokes"
        ));
    }

    #[test]
    fn test_validate_rejects_empty_patterns() {
        let table = ResponseTable {
            categories: vec![Category::new("jokes", &[], &["Ha!"])],
            default_responses: vec!["Hmm.".to_string()],
        };
        assert!(matches!(
            table.validate(),
            Err(TableError::EmptyPatterns(_))
        ));
    }

    #[test]
    fn test_validate_rejects_uppercase_pattern() {
        let table = ResponseTable {
            categories: vec![Category::new("greetings", &["Hello"], &["Hi!"])],
            default_responses: vec!["Hmm.".to_string()],
        };
        assert!(matches!(
            table.validate(),
            Err(TableError::InvalidPattern { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_blank_pattern() {
        let table = ResponseTable {
            categories: vec![Category::new("greetings", &["  "], &["Hi!"])],
            default_responses: vec!["Hmm.".to_string()],
        };
        assert!(matches!(
            table.validate(),
            Err(TableError::InvalidPattern { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_duplicate_category() {
        let table = ResponseTable {
            categories: vec![
                Category::new("jokes", &["joke"], &["Ha!"]),
                Category::new("jokes", &["funny"], &["Heh."]),
            ],
            default_responses: vec!["Hmm.".to_string()],
        };
        assert!(matches!(
            table.validate(),
            Err(TableError::DuplicateCategory(_))
        ));
    }

    #[test]
    fn test_validate_rejects_unnamed_category() {
        let table = ResponseTable {
            categories: vec![Category::new("", &["joke"], &["Ha!"])],
            default_responses: vec!["Hmm.".to_string()],
        };
        assert!(matches!(table.validate(), Err(TableError::UnnamedCategory(0))));
    }

    #[test]
    fn test_validate_rejects_empty_default_pool() {
        let table = ResponseTable {
            categories: vec![Category::new("jokes", &["joke"], &["Ha!"])],
            default_responses: vec![],
        };
        assert!(matches!(table.validate(), Err(TableError::EmptyDefaultPool)));
    }

    #[test]
    fn test_from_toml_str_preserves_order() {
        let table = ResponseTable::from_toml_str(
            r#"
            default_responses = ["Hmm."]

            [[categories]]
            name = "weather"
            patterns = ["rain", "sun"]
            responses = ["Looks wet.", "Looks bright."]

            [[categories]]
            name = "coffee"
            patterns = ["espresso"]
            responses = ["One shot coming up."]
            "#,
        )
        .unwrap();
        assert_eq!(table.categories.len(), 2);
        assert_eq!(table.categories[0].name, "weather");
        assert_eq!(table.categories[1].name, "coffee");
        assert!(table.validate().is_ok());
    }

    #[test]
    fn test_from_toml_str_rejects_garbage() {
        assert!(ResponseTable::from_toml_str("not a table at all {{{").is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let table = ResponseTable::builtin();
        let text = toml::to_string(&table).unwrap();
        let back = ResponseTable::from_toml_str(&text).unwrap();
        assert_eq!(back, table);
    }
}
