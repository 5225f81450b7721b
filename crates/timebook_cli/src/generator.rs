//! Seeded sample-data generator.
//!
//! Builds a realistic book through the public `TimeBook` API only, so the
//! generated data always satisfies store invariants. Members are drawn from
//! ids that actually exist; repeated draws for the same group are skipped.

use anyhow::{bail, Result};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;
use timebook_core::{GroupDescriptor, PersonDescriptor, PersonId, Role, StoreError, TimeBook};

const MAX_NAME_ATTEMPTS: usize = 50;

const FIRST_NAMES: &[&str] = &[
    "Aaron", "Aisha", "Alex", "Amelia", "Ben", "Bryan", "Cheryl", "Chloe", "Daniel", "Darren",
    "Elaine", "Ethan", "Fiona", "Gabriel", "Grace", "Hannah", "Irfan", "Isaac", "Jasmine",
    "Javier", "Kai", "Kavya", "Liam", "Lydia", "Marcus", "Mei", "Nadia", "Nathan", "Olivia",
    "Priya", "Qing", "Rachel", "Ravi", "Samuel", "Sarah", "Siti", "Terence", "Tiffany", "Umar",
    "Vanessa", "Wei", "Xavier", "Yasmin", "Yi Ling", "Zachary", "Zara", "Joel", "Nur",
];

const LAST_NAMES: &[&str] = &[
    "Abdullah", "Ang", "Chan", "Chen", "Chua", "Fernandez", "Goh", "Heng", "Ho", "Koh", "Kumar",
    "Lam", "Lee", "Lim", "Loh", "Low", "Menon", "Ng", "Ong", "Pillai", "Quek", "Rahman",
    "Seah", "Sim", "Singh", "Soh", "Tan", "Tay", "Teo", "Toh", "Wee", "Wong", "Yap", "Yeo",
    "Ismail", "Nair", "Pereira", "Sng", "Tham", "Chia", "Foo", "Hong", "Kwek", "Leong", "Mok",
    "Poh", "Sia", "Yong",
];

const STREETS: &[&str] = &[
    "Kent Ridge Road", "Clementi Avenue 3", "Orchard Road", "Tampines Street 81",
    "Jurong West Street 42", "Bukit Timah Road", "Ang Mo Kio Avenue 6", "Serangoon Road",
];

const REMARKS: &[&str] = &[
    "Plays the violin",
    "Enjoys listening to jazz",
    "Interned at a fintech startup",
    "Likes the colour teal",
    "Has a dog called Mochi",
    "Has a cat called Pepper",
    "Plays competitive chess",
    "Reads science fiction",
];

const GROUP_PREFIXES: &[&str] = &[
    "Andromeda", "Orion", "Lyra", "Cygnus", "Draco", "Phoenix", "Pegasus", "Hydra", "Vega",
    "Sirius", "Polaris", "Altair", "Rigel", "Deneb", "Castor", "Pollux", "Titan", "Europa",
    "Callisto", "Ganymede", "Io", "Triton", "Oberon", "Atlas", "Helios", "Selene", "Gaia",
    "Hyperion", "Rhea", "Tethys",
];

const GROUP_SUFFIXES: &[&str] = &[
    "Squad", "Collective", "Crew", "Guild", "Circle", "Society", "Club", "Team", "Lab",
    "Studio", "Works", "Union", "League", "Syndicate", "Council", "Forum", "Alliance",
    "Project", "Taskforce", "Network", "Division", "Unit", "Cohort", "Chapter", "Cell",
    "Assembly", "Party", "Band", "Troupe", "House",
];

const POSITIONS: &[&str] = &[
    "Lead", "Coordinator", "Treasurer", "Secretary", "Designer", "Developer", "Tester",
    "Facilitator", "Note Taker", "Liaison",
];

/// Tunables for one generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub people: usize,
    pub max_per_group: usize,
    pub seed: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            people: 1000,
            max_per_group: 6,
            seed: 2103,
        }
    }
}

/// Counts reported after a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationSummary {
    pub persons: usize,
    pub groups: usize,
    pub mappings: usize,
}

pub struct TestDataGenerator {
    config: GeneratorConfig,
    rng: StdRng,
}

impl TestDataGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        let rng = StdRng::seed_from_u64(config.seed);
        Self { config, rng }
    }

    pub fn generate(&mut self) -> Result<(TimeBook, GenerationSummary)> {
        if self.config.max_per_group < 2 {
            bail!("max group size must be at least 2");
        }

        let mut book = TimeBook::new();
        let person_ids = self.generate_persons(&mut book)?;
        self.generate_groups(&mut book)?;
        self.generate_memberships(&mut book, &person_ids)?;

        let summary = GenerationSummary {
            persons: book.persons().len(),
            groups: book.groups().len(),
            mappings: book.mappings().len(),
        };
        Ok((book, summary))
    }

    fn generate_persons(&mut self, book: &mut TimeBook) -> Result<Vec<PersonId>> {
        let mut used_names = HashSet::new();
        let mut ids = Vec::with_capacity(self.config.people);

        for _ in 0..self.config.people {
            let (first, last) = self.unique_pick(&mut used_names, "person", |rng| {
                (pick(rng, FIRST_NAMES), pick(rng, LAST_NAMES))
            })?;

            let mut descriptor = PersonDescriptor::new().with_name(format!("{first} {last}"));
            if self.rng.gen_bool(0.5) {
                let prefix = pick(&mut self.rng, &["6", "8", "9"]);
                let number: u32 = self.rng.gen_range(0..10_000_000);
                descriptor = descriptor.with_phone(format!("{prefix}{number:07}"));
            }
            if self.rng.gen_bool(0.5) {
                let username = format!("{first}.{last}")
                    .to_lowercase()
                    .replace(|c: char| c.is_whitespace() || c == '\'', "");
                descriptor = descriptor.with_email(format!("{username}@example.com"));
            }
            if self.rng.gen_bool(0.5) {
                let block: u32 = self.rng.gen_range(1..999);
                let street = pick(&mut self.rng, STREETS);
                descriptor = descriptor.with_address(format!("{block} {street}"));
            }
            if self.rng.gen_bool(0.4) {
                descriptor = descriptor.with_remark(pick(&mut self.rng, REMARKS));
            }

            ids.push(book.add_person(&descriptor)?.id());
        }

        Ok(ids)
    }

    fn generate_groups(&mut self, book: &mut TimeBook) -> Result<()> {
        let people = book.persons().len();
        let low = people / self.config.max_per_group;
        let high = (people / 2).max(low);
        let target = self.rng.gen_range(low..=high);
        let mut used_names = HashSet::new();

        for _ in 0..target {
            let (prefix, suffix) = self.unique_pick(&mut used_names, "group", |rng| {
                (pick(rng, GROUP_PREFIXES), pick(rng, GROUP_SUFFIXES))
            })?;
            let mut descriptor = GroupDescriptor::new().with_name(format!("{prefix} {suffix}"));
            if self.rng.gen_bool(0.5) {
                descriptor = descriptor.with_remark(format!(
                    "Meets every {}",
                    pick(&mut self.rng, &["Monday", "Wednesday", "Friday", "weekend"])
                ));
            }
            book.add_group(&descriptor)?;
        }
        Ok(())
    }

    fn generate_memberships(&mut self, book: &mut TimeBook, person_ids: &[PersonId]) -> Result<()> {
        let group_ids: Vec<_> = book.groups().iter().map(|group| group.id()).collect();

        for group_id in group_ids {
            let member_count = self.rng.gen_range(2..=self.config.max_per_group);
            for _ in 0..member_count {
                let Some(person_id) = person_ids.choose(&mut self.rng).copied() else {
                    continue;
                };
                let role = if self.rng.gen_bool(0.5) {
                    Role::of(pick(&mut self.rng, POSITIONS))?
                } else {
                    Role::empty()
                };
                match book.add_mapping(person_id, group_id, role) {
                    Ok(_) | Err(StoreError::DuplicateMapping { .. }) => {}
                    Err(err) => return Err(err.into()),
                }
            }
        }
        Ok(())
    }

    /// Draws `(first, second)` word pairs until one forms an unused name.
    fn unique_pick<F>(
        &mut self,
        used: &mut HashSet<String>,
        kind: &str,
        mut draw: F,
    ) -> Result<(&'static str, &'static str)>
    where
        F: FnMut(&mut StdRng) -> (&'static str, &'static str),
    {
        for _ in 0..MAX_NAME_ATTEMPTS {
            let (first, second) = draw(&mut self.rng);
            if used.insert(format!("{first} {second}")) {
                return Ok((first, second));
            }
        }
        bail!("tried {MAX_NAME_ATTEMPTS} times in a row to generate a unique {kind} name")
    }
}

fn pick<'a>(rng: &mut StdRng, options: &[&'a str]) -> &'a str {
    options.choose(rng).copied().unwrap_or_default()
}
