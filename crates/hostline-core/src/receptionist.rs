//! Demo Receptionist
//!
//! Scripted receptionist behind the chat demo page. Replies are keyword
//! driven and deterministic so the demo never depends on a model being up.

use serde::{Deserialize, Serialize};

/// What the caller is asking for
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Greeting,
    Booking,
    Hours,
    Pricing,
    Transfer,
    Unknown,
}

impl Intent {
    /// Keywords checked in order; the first intent with a hit wins
    const KEYWORDS: &'static [(Self, &'static [&'static str])] = &[
        (Self::Transfer, &["human", "person", "agent", "manager", "speak to", "talk to"]),
        (Self::Booking, &["book", "appointment", "schedule", "reserve", "reschedule"]),
        (Self::Hours, &["hours", "open", "close", "closing", "when are you"]),
        (Self::Pricing, &["price", "pricing", "cost", "how much", "quote", "fee"]),
        (Self::Greeting, &["hello", "hi", "hey", "good morning", "good afternoon"]),
    ];

    /// Classify a caller message
    pub fn detect(message: &str) -> Self {
        let text = message.to_lowercase();
        let words: Vec<&str> = text
            .split(|c: char| !c.is_alphanumeric())
            .filter(|w| !w.is_empty())
            .collect();

        Self::KEYWORDS
            .iter()
            .find(|(_, keywords)| {
                keywords.iter().any(|k| {
                    if k.contains(' ') {
                        text.contains(k)
                    } else {
                        words.contains(k)
                    }
                })
            })
            .map_or(Self::Unknown, |(intent, _)| *intent)
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Greeting => "greeting",
            Self::Booking => "booking",
            Self::Hours => "hours",
            Self::Pricing => "pricing",
            Self::Transfer => "transfer",
            Self::Unknown => "unknown",
        }
    }
}

/// Business the demo receptionist answers for
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BusinessProfile {
    pub name: String,
    pub hours: String,
    pub booking_url: String,
    pub phone: String,
}

impl Default for BusinessProfile {
    fn default() -> Self {
        Self {
            name: "Riverside Dental".into(),
            hours: "Monday to Friday, 8am to 6pm".into(),
            booking_url: "/chat#book".into(),
            phone: "(555) 010-0199".into(),
        }
    }
}

impl BusinessProfile {
    /// Default profile with the name taken from `HOSTLINE_BUSINESS_NAME`
    pub fn from_env() -> Self {
        let mut profile = Self::default();
        if let Ok(name) = std::env::var("HOSTLINE_BUSINESS_NAME") {
            if !name.trim().is_empty() {
                profile.name = name;
            }
        }
        profile
    }
}

/// Scripted receptionist
#[derive(Clone, Debug, Default)]
pub struct DemoReceptionist {
    profile: BusinessProfile,
}

impl DemoReceptionist {
    pub const fn new(profile: BusinessProfile) -> Self {
        Self { profile }
    }

    /// Opening line shown before the visitor types anything
    pub fn greeting(&self) -> String {
        format!("Thanks for calling {}! How can I help you today?", self.profile.name)
    }

    /// Answer a caller message
    pub fn reply(&self, message: &str) -> (Intent, String) {
        let intent = Intent::detect(message);
        let p = &self.profile;

        let text = match intent {
            Intent::Greeting => self.greeting(),
            Intent::Booking => format!(
                "I can book that for you. Pick a time that suits you at {}, or tell me a day and I'll check availability.",
                p.booking_url
            ),
            Intent::Hours => format!("{} is open {}.", p.name, p.hours),
            Intent::Pricing => "Pricing depends on the service. I can have someone send you a quote, \
                                what's the best email to reach you?"
                .to_string(),
            Intent::Transfer => format!(
                "Of course. I'm transferring you to the front desk now. If we get cut off, call {}.",
                p.phone
            ),
            Intent::Unknown => "I didn't quite catch that. I can book appointments, share our hours, \
                                or connect you with the team."
                .to_string(),
        };

        tracing::debug!(intent = intent.as_str(), "demo receptionist replied");
        (intent, text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_intents() {
        assert_eq!(Intent::detect("Hi there"), Intent::Greeting);
        assert_eq!(Intent::detect("I'd like to book a cleaning"), Intent::Booking);
        assert_eq!(Intent::detect("What are your hours?"), Intent::Hours);
        assert_eq!(Intent::detect("How much is a checkup"), Intent::Pricing);
        assert_eq!(Intent::detect("Can I talk to a person"), Intent::Transfer);
        assert_eq!(Intent::detect("purple elephants"), Intent::Unknown);
    }

    #[test]
    fn test_whole_word_matching() {
        // "this" contains "hi" but is not a greeting
        assert_eq!(Intent::detect("this"), Intent::Unknown);
    }

    #[test]
    fn test_transfer_beats_greeting() {
        assert_eq!(Intent::detect("hello, can I speak to a manager"), Intent::Transfer);
    }

    #[test]
    fn test_reply_uses_profile() {
        let receptionist = DemoReceptionist::new(BusinessProfile {
            name: "Harbor Vet".into(),
            ..BusinessProfile::default()
        });

        let (intent, text) = receptionist.reply("when are you open?");
        assert_eq!(intent, Intent::Hours);
        assert!(text.starts_with("Harbor Vet is open"));
    }

    #[test]
    fn test_intent_serializes_snake_case() {
        let json = serde_json::to_string(&Intent::Booking).unwrap();
        assert_eq!(json, "\"booking\"");
    }
}
