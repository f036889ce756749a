//! Reference pools the generator samples from.
//!
//! Pools are plain data: loaded once at startup (built-in or from a JSON
//! file) and handed to every generator by reference.

use serde::{Deserialize, Serialize};

use crate::character::Gender;

/// Marker replaced by the character's name in background templates.
pub const NAME_MARKER: &str = "{name}";

/// Ordered candidate lists for every sampled field.
///
/// Order is significant: a pool's index order is part of what a seed
/// reproduces. Keys missing from a JSON document deserialize as empty pools.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pools {
    pub male_names: Vec<String>,
    pub female_names: Vec<String>,
    pub surnames: Vec<String>,
    pub occupations: Vec<String>,
    pub hair_colors: Vec<String>,
    pub eye_colors: Vec<String>,
    pub builds: Vec<String>,
    pub personality_traits: Vec<String>,
    pub hobbies: Vec<String>,
    pub background_templates: Vec<String>,
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

impl Pools {
    /// The built-in reference data.
    pub fn builtin() -> Self {
        Self {
            male_names: owned(MALE_NAMES),
            female_names: owned(FEMALE_NAMES),
            surnames: owned(SURNAMES),
            occupations: owned(OCCUPATIONS),
            hair_colors: owned(HAIR_COLORS),
            eye_colors: owned(EYE_COLORS),
            builds: owned(BUILDS),
            personality_traits: owned(PERSONALITY_TRAITS),
            hobbies: owned(HOBBIES),
            background_templates: owned(BACKGROUND_TEMPLATES),
        }
    }

    /// Parse a pool document, e.g. the contents of `POOLS_PATH`.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// First names appropriate for `gender`.
    ///
    /// Non-binary and other draw from the male pool followed by the female
    /// pool.
    pub fn first_names(&self, gender: Gender) -> Vec<&str> {
        let male = self.male_names.iter().map(String::as_str);
        let female = self.female_names.iter().map(String::as_str);
        match gender {
            Gender::Male => male.collect(),
            Gender::Female => female.collect(),
            Gender::NonBinary | Gender::Other => male.chain(female).collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// Built-in data
// ---------------------------------------------------------------------------

const MALE_NAMES: &[&str] = &[
    "James", "John", "Robert", "Michael", "William", "David", "Richard", "Joseph", "Thomas",
    "Charles", "Daniel", "Matthew", "Anthony", "Mark", "Steven", "Paul", "Andrew", "Joshua",
    "Kenneth", "Kevin", "Brian", "George", "Edward", "Ronald", "Timothy",
];

const FEMALE_NAMES: &[&str] = &[
    "Mary", "Patricia", "Jennifer", "Linda", "Elizabeth", "Barbara", "Susan", "Jessica", "Sarah",
    "Karen", "Nancy", "Lisa", "Margaret", "Betty", "Sandra", "Ashley", "Dorothy", "Kimberly",
    "Emily", "Donna", "Michelle", "Carol", "Amanda", "Melissa", "Deborah",
];

const SURNAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez",
    "Martinez", "Hernandez", "Lopez", "Gonzalez", "Wilson", "Anderson", "Thomas", "Taylor",
    "Moore", "Jackson", "Martin", "Lee", "Perez", "Thompson", "White", "Harris",
];

const OCCUPATIONS: &[&str] = &[
    "Software Engineer", "Professor", "Nurse", "Chef", "Architect", "Librarian", "Carpenter",
    "Journalist", "Pharmacist", "Electrician", "Photographer", "Accountant", "Firefighter",
    "Veterinarian", "Graphic Designer", "Mechanic", "Lawyer", "Musician", "Farmer", "Pilot",
];

const HAIR_COLORS: &[&str] = &[
    "black", "brown", "blonde", "red", "auburn", "gray", "white", "chestnut",
];

const EYE_COLORS: &[&str] = &["brown", "blue", "green", "hazel", "gray", "amber"];

const BUILDS: &[&str] = &["slim", "athletic", "average", "muscular", "stocky", "lanky"];

const PERSONALITY_TRAITS: &[&str] = &[
    "curious", "ambitious", "loyal", "stubborn", "generous", "witty", "patient", "impulsive",
    "cautious", "optimistic", "sarcastic", "empathetic", "reserved", "charismatic", "meticulous",
];

const HOBBIES: &[&str] = &[
    "reading", "hiking", "painting", "cooking", "gardening", "chess", "photography", "cycling",
    "knitting", "fishing", "birdwatching", "woodworking", "swimming", "gaming", "pottery",
];

const BACKGROUND_TEMPLATES: &[&str] = &[
    "{name} grew up in a small coastal town and still keeps a jar of sea glass on the windowsill.",
    "{name} moved to the city at eighteen with nothing but a suitcase and a borrowed guitar.",
    "{name} was raised by grandparents who ran a bakery, and learned early to wake before dawn.",
    "{name} spent a decade travelling before finally settling down in a quiet mountain village.",
    "{name} is the youngest of five siblings and has always had to fight to be heard.",
    "{name} once won a regional spelling bee and never lets anyone forget it.",
    "{name} left a promising career to care for a sick parent and discovered a new calling.",
    "{name} grew up on a farm and still measures distance in fields rather than miles.",
    "{name} was an exchange student abroad and came home speaking three languages.",
    "{name} survived a shipwreck as a child and has been fascinated by the sea ever since.",
    "{name} inherited a crumbling old house and has spent years restoring it room by room.",
    "{name} is a self-taught expert in local history and leads walking tours on weekends.",
];
