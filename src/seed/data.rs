//! Word lists and templates for generated sample orders.

/// How many Wooden Trains orders the generator adds to Jingleberry's queue.
pub const TRAIN_COUNT: usize = 47;

/// First names cycled through for generated children.
pub static SAMPLE_FIRST_NAMES: [&str; 20] = [
    "Tommy", "Sarah", "Jake", "Emma", "Noah", "Olivia", "Liam", "Ava", "Mason", "Sophia", "Ethan",
    "Isabella", "Logan", "Mia", "Lucas", "Charlotte", "Jack", "Amelia", "Ryan", "Harper",
];

/// Last names cycled through for generated children.
pub static SAMPLE_LAST_NAMES: [&str; 20] = [
    "Anderson", "Wilson", "Garcia", "Martinez", "Brown", "Davis", "Miller", "Taylor", "Thomas",
    "Moore", "Jackson", "White", "Harris", "Clark", "Lewis", "Walker", "Hall", "Young", "King",
    "Wright",
];

/// Delivery locations cycled through for generated orders.
pub static SAMPLE_LOCATIONS: [&str; 18] = [
    "Boston, USA",
    "Chicago, USA",
    "Seattle, USA",
    "Denver, USA",
    "Toronto, Canada",
    "Vancouver, Canada",
    "Sydney, Australia",
    "Melbourne, Australia",
    "London, UK",
    "Manchester, UK",
    "Berlin, Germany",
    "Munich, Germany",
    "Tokyo, Japan",
    "Osaka, Japan",
    "Seoul, South Korea",
    "Stockholm, Sweden",
    "Oslo, Norway",
    "Copenhagen, Denmark",
];

/// Wooden train variants for the generated backlog.
pub static TRAIN_TYPES: [&str; 8] = [
    "Classic Wooden Train with 8 Cars",
    "Deluxe Wooden Train Set",
    "Vintage Steam Engine Train",
    "Express Wooden Train",
    "Mountain Railway Train Set",
    "Cargo Wooden Train",
    "Passenger Express Train",
    "Wooden Freight Train",
];

/// Letter greetings; the children's spelling is part of the charm.
pub static LETTER_GREETINGS: [&str; 4] = ["Deer Santa", "Dear Santa", "Hi Santa", "Hello Santa"];

/// Letter request phrases.
pub static LETTER_WANTS: [&str; 4] = [
    "I realy want",
    "I would luv",
    "Can I plees have",
    "I wish for",
];

/// Good-behavior promises.
pub static LETTER_PROMISES: [&str; 4] = [
    "I promis Ive been good",
    "Ive been realy good this yeer",
    "I did all my homwork",
    "I helped mom and dad",
];

/// Extra wishes appended to the letter body.
pub static LETTER_EXTRAS: [&str; 10] = [
    "Can it have red and blue colors?",
    "Can you make the wheels spin reel fast?",
    "I want lots of cars!",
    "Can it have a caboose?",
    "Make it go choo choo!",
    "I love tranes so much!",
    "Can it carry cargo?",
    "I want to be a trane driver!",
    "Tranes are the best!",
    "Can you add extra track?",
];

/// Letter sign-offs.
pub static LETTER_CLOSINGS: [&str; 4] = ["Thank you", "Thanks Santa", "Love", "Your frend"];
