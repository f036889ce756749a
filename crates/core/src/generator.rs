//! Character assembly and deterministic bulk expansion.
//!
//! Draw order is fixed and must not change: gender, name (first, surname),
//! age, occupation, background, hair color, eye color, height, build,
//! personality traits, hobby count, hobbies. A field supplied as an
//! override skips its draws entirely.

use crate::character::{Appearance, Character, Gender, GenerationOptions};
use crate::pools::{Pools, NAME_MARKER};
use crate::rng::{RandomStream, Seed, Stream};
use crate::sampling::Sampler;

pub const MIN_AGE: i32 = 18;
pub const MAX_AGE: i32 = 65;
pub const MIN_HEIGHT_CM: i32 = 150;
pub const MAX_HEIGHT_CM: i32 = 200;
pub const PERSONALITY_TRAIT_COUNT: usize = 3;
pub const MIN_HOBBIES: i32 = 2;
pub const MAX_HOBBIES: i32 = 4;

/// Separator between a base seed and the character index in bulk expansion.
pub const SUB_SEED_SEPARATOR: char = '_';

/// Seed for the `index`-th character of a bulk expansion: `"{seed}_{index}"`.
pub fn derive_seed(base: &Seed, index: usize) -> Seed {
    Seed::new(format!("{base}{SUB_SEED_SEPARATOR}{index}"))
}

/// Produces exactly one character.
///
/// Construct a fresh generator for each character: [`generate`] consumes it,
/// so stream state can never leak from one character into the next.
///
/// [`generate`]: CharacterGenerator::generate
pub struct CharacterGenerator<'a, S: RandomStream = Stream> {
    pools: &'a Pools,
    sampler: Sampler<S>,
    seed: Option<Seed>,
}

impl<'a> CharacterGenerator<'a, Stream> {
    /// Seeded when `seed` is present, non-deterministic otherwise.
    pub fn new(pools: &'a Pools, seed: Option<&Seed>) -> Self {
        Self {
            pools,
            sampler: Sampler::new(Stream::for_seed(seed)),
            seed: seed.cloned(),
        }
    }
}

impl<'a, S: RandomStream> CharacterGenerator<'a, S> {
    /// Drive generation from an arbitrary stream. The resulting character
    /// carries no seed.
    pub fn with_stream(pools: &'a Pools, stream: S) -> Self {
        Self {
            pools,
            sampler: Sampler::new(stream),
            seed: None,
        }
    }

    fn pick(&mut self, pool: &[String]) -> String {
        self.sampler.choice(pool).cloned().unwrap_or_default()
    }

    fn resolve_gender(&mut self, requested: Option<&str>) -> Gender {
        if let Some(gender) = requested.and_then(Gender::parse) {
            return gender;
        }
        self.sampler
            .choice(&Gender::ALL)
            .copied()
            .unwrap_or(Gender::Other)
    }

    fn resolve_name(&mut self, requested: Option<&str>, gender: Gender) -> String {
        if let Some(name) = requested {
            return name.to_string();
        }
        let pools = self.pools;
        let first_names = pools.first_names(gender);
        let first = self.sampler.choice(&first_names).copied().unwrap_or("");
        let surname = self.pick(&pools.surnames);
        [first, surname.as_str()]
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn background(&mut self, name: &str) -> String {
        let pools = self.pools;
        self.sampler
            .choice(&pools.background_templates)
            .map(|template| template.replace(NAME_MARKER, name))
            .unwrap_or_default()
    }

    /// Apply `options` and fill every remaining field from the stream.
    pub fn generate(mut self, options: &GenerationOptions) -> Character {
        let pools = self.pools;

        let gender = self.resolve_gender(options.gender.as_deref());
        let name = self.resolve_name(options.name.as_deref(), gender);
        let age = match options.age {
            Some(age) => age,
            None => self.sampler.int_range(MIN_AGE, MAX_AGE),
        };
        let occupation = match &options.occupation {
            Some(occupation) => occupation.clone(),
            None => self.pick(&pools.occupations),
        };
        let background = self.background(&name);

        let hair_color = match &options.hair_color {
            Some(v) => v.clone(),
            None => self.pick(&pools.hair_colors),
        };
        let eye_color = match &options.eye_color {
            Some(v) => v.clone(),
            None => self.pick(&pools.eye_colors),
        };
        let height_cm = match options.height_cm {
            Some(v) => v,
            None => self.sampler.int_range(MIN_HEIGHT_CM, MAX_HEIGHT_CM),
        };
        let build = match &options.build {
            Some(v) => v.clone(),
            None => self.pick(&pools.builds),
        };

        let personality_traits = self
            .sampler
            .distinct_sample(&pools.personality_traits, PERSONALITY_TRAIT_COUNT);
        let hobby_count = self.sampler.int_range(MIN_HOBBIES, MAX_HOBBIES) as usize;
        let hobbies = self.sampler.distinct_sample(&pools.hobbies, hobby_count);

        Character {
            name,
            age,
            gender,
            occupation,
            background,
            appearance: Appearance {
                hair_color,
                eye_color,
                height_cm,
                build,
            },
            personality_traits,
            hobbies,
            seed: self.seed.map(Seed::into_string),
        }
    }
}

/// Generate a single character with a fresh generator.
pub fn generate(pools: &Pools, seed: Option<&Seed>, options: &GenerationOptions) -> Character {
    CharacterGenerator::new(pools, seed).generate(options)
}

/// Seeds for a batch of `count`: a single character keeps `base` verbatim,
/// larger batches expand it with [`derive_seed`].
pub fn batch_seeds(base: &Seed, count: usize) -> Vec<Seed> {
    if count == 1 {
        vec![base.clone()]
    } else {
        (0..count).map(|i| derive_seed(base, i)).collect()
    }
}

/// Generate a batch the way every entry point does: one character uses the
/// seed as given, more than one uses [`batch_seeds`].
pub fn generate_batch(
    pools: &Pools,
    seed: Option<&Seed>,
    options: &GenerationOptions,
    count: usize,
) -> Vec<Character> {
    match seed {
        Some(base) => batch_seeds(base, count)
            .iter()
            .map(|seed| generate(pools, Some(seed), options))
            .collect(),
        None => generate_many(pools, None, options, count),
    }
}

/// Generate `count` characters.
///
/// With a base seed, character `i` is generated from
/// [`derive_seed`]`(base, i)` on its own stream, so the sequence is
/// reproducible and no character's draws affect another's. Without one,
/// every character is independently random.
pub fn generate_many(
    pools: &Pools,
    base_seed: Option<&Seed>,
    options: &GenerationOptions,
    count: usize,
) -> Vec<Character> {
    (0..count)
        .map(|i| {
            let seed = base_seed.map(|base| derive_seed(base, i));
            generate(pools, seed.as_ref(), options)
        })
        .collect()
}
