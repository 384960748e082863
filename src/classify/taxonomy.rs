/// One appointment-intent category and its canonical trigger phrases.
///
/// Phrase order only matters for deterministic iteration, not scoring.
#[derive(Debug, Clone)]
pub struct Category {
    pub label: String,
    pub phrases: Vec<String>,
}

impl Category {
    pub fn new(label: impl Into<String>, phrases: &[&str]) -> Self {
        Self {
            label: label.into(),
            phrases: phrases.iter().map(|p| p.to_string()).collect(),
        }
    }
}

/// Immutable table of intent categories, in declaration order.
///
/// Declaration order is load-bearing: candidate iteration and the
/// first-encountered tie-break both follow it. Constructed once and passed
/// to the classifier; never mutated afterwards.
#[derive(Debug, Clone)]
pub struct Taxonomy {
    categories: Vec<Category>,
}

impl Taxonomy {
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// The appointment-intent taxonomy for automotive service calls.
    pub fn appointment_intents() -> Self {
        Self::new(vec![
            Category::new(
                "Specific appointment or walk-in time / range within 1 hour",
                &[
                    "i'll be there at",
                    "i can come at",
                    "i'll reach by",
                    "i'll be there around",
                    "put me down for",
                    "i'll see you then",
                    "drop it off before",
                    "can i drop off at",
                    "be there in 30 minutes",
                    "i'm on my way now",
                    "being towed there now",
                    "you can come now",
                    "come in now",
                    "ten thirty am works for me",
                    "coming in at",
                    "reaching in 30",
                    "i'm heading over now",
                    "on my way to you",
                    "i'll swing by at",
                ],
            ),
            Category::new(
                "Unscheduled walk-in or loose appointment time / range exceeding 1 hour",
                &[
                    "sometime between twelve and four",
                    "next tuesday",
                    "drop by when i can",
                    "i might walk in",
                    "i'll come sometime",
                    "i might stop by",
                    "maybe around",
                    "not sure what time",
                    "will try to come",
                    "whenever i get a chance",
                    "possibly during the afternoon",
                    "i'll see what time works",
                    "could be around noon",
                    "no fixed time yet",
                    "i'll come by later today",
                ],
            ),
            Category::new(
                "Appointment requested/mentioned but not set",
                &[
                    "i want to schedule",
                    "i want to make an appointment",
                    "can i book something",
                    "looking to schedule",
                    "want to get on the calendar",
                    "i'd like to plan something",
                    "hoping to set an appointment",
                    "i'm planning to get it serviced",
                    "haven't picked a day yet",
                    "just calling to get some info",
                    "do you have anything available",
                    "can i talk to someone about scheduling",
                    "is there any time available",
                    "do you have slots open",
                    "need to schedule",
                    "can i check availability",
                ],
            ),
            Category::new(
                "No appointment, walk-in, or drop-off discussed",
                &[
                    "battery replacement",
                    "how much does battery replacement cost",
                    "check engine light",
                    "my car has a problem",
                    "engine issue",
                    "just wanted to ask about pricing",
                    "what's the cost for",
                    "do you repair",
                    "inquiry about service",
                    "need some information on",
                    "what are your rates",
                    "how much would it cost to fix",
                ],
            ),
            Category::new(
                "Upcoming scheduled appointment",
                &[
                    "already booked",
                    "booked a brake inspection",
                    "have an appointment",
                    "for friday at three pm",
                    "just wanted to confirm",
                    "appointment is at",
                    "scheduled for tomorrow",
                    "i'm coming in on",
                    "my appointment is next week",
                    "already scheduled",
                    "scheduled to come in",
                    "we already have a time",
                ],
            ),
            Category::new(
                "Vehicle already in service",
                &[
                    "car was towed to your shop",
                    "due to a breakdown",
                    "diagnostic has been started",
                    "already towed",
                    "already in service",
                    "car is there already",
                    "vehicle is at your place",
                    "it's already being looked at",
                    "currently in service",
                    "you guys already have my car",
                    "in your shop now",
                    "you started work already",
                ],
            ),
            Category::new(
                "Not an appointment opportunity",
                &[
                    "my bumper got damaged",
                    "minor accident",
                    "do you do body work",
                    "call a collision repair center",
                    "collision",
                    "car wash",
                    "interested in a paint job",
                    "do you offer detailing",
                    "asking about cleaning",
                    "just need cosmetic work",
                    "only need touch up",
                    "no repairs, just asking",
                    "not service related",
                ],
            ),
            Category::new(
                "Correction: caller never connected to a live, qualified agent",
                &[
                    "automated system",
                    "left a voicemail",
                    "voicemail for a call back",
                    "tried calling earlier",
                    "leave a message",
                    "couldn't reach anyone",
                    "just got the answering machine",
                    "no one picked up",
                    "sent a voicemail",
                    "please call me back",
                    "nobody answered",
                ],
            ),
        ])
    }
}
