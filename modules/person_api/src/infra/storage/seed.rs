//! Random sample data for a fresh store.

use chrono::{DateTime, SecondsFormat, Utc};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::contract::model::NewPerson;
use crate::domain::repo::PersonsRepository;

const FIRST_NAMES: &[&str] = &[
    "Aaliyah", "Amir", "Beatrice", "Carlos", "Chen", "Dmitri", "Elena", "Fatima", "Gabriel",
    "Hannah", "Ines", "Jamal", "Keiko", "Liam", "Maya", "Noah", "Olga", "Priya", "Quinn", "Rafael",
    "Sofia", "Tomas", "Uma", "Victor", "Wen", "Yusuf", "Zoe",
];

const LAST_NAMES: &[&str] = &[
    "Anderson", "Baker", "Castillo", "Dubois", "Eriksen", "Fischer", "Garcia", "Hoffman", "Ivanova",
    "Johnson", "Kowalski", "Larsen", "Martinez", "Nakamura", "O'Brien", "Patel", "Rossi", "Schmidt",
    "Tanaka", "Urban", "Vasquez", "Williams", "Young", "Zimmermann",
];

const EMAIL_DOMAINS: &[&str] = &["example.com", "example.org", "mail.test", "inbox.test"];

const BIO_ROLES: &[&str] = &[
    "developer", "librarian", "gardener", "photographer", "nurse", "architect", "musician",
    "cyclist", "chef", "writer",
];

const BIO_INTERESTS: &[&str] = &[
    "open source", "hiking", "board games", "jazz", "astronomy", "baking", "travel", "chess",
    "film", "running",
];

/// 1950-01-01T00:00:00Z
const BIRTH_MIN: i64 = -631_152_000;
/// 2005-12-31T23:59:59Z
const BIRTH_MAX: i64 = 1_136_073_599;

fn pick<'a, R: Rng + ?Sized>(rng: &mut R, items: &[&'a str]) -> &'a str {
    items.choose(rng).copied().unwrap_or_default()
}

fn email_local_part(first: &str, last: &str) -> String {
    format!("{first}.{last}")
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '.')
        .collect::<String>()
        .to_ascii_lowercase()
}

/// One plausible person. Each optional field is present with probability 1/2.
pub fn random_person<R: Rng + ?Sized>(rng: &mut R) -> NewPerson {
    let first_name = pick(rng, FIRST_NAMES).to_string();
    let last_name = pick(rng, LAST_NAMES).to_string();
    let email = format!(
        "{}{}@{}",
        email_local_part(&first_name, &last_name),
        rng.gen_range(1..100),
        pick(rng, EMAIL_DOMAINS)
    );

    let birthdate = rng
        .gen_bool(0.5)
        .then(|| DateTime::<Utc>::from_timestamp(rng.gen_range(BIRTH_MIN..=BIRTH_MAX), 0))
        .flatten()
        .map(|d| d.to_rfc3339_opts(SecondsFormat::Millis, true));
    let bio = rng.gen_bool(0.5).then(|| {
        format!(
            "{} {}, {} enthusiast",
            pick(rng, BIO_INTERESTS),
            pick(rng, BIO_ROLES),
            pick(rng, BIO_INTERESTS)
        )
    });
    let lucky_number = rng.gen_bool(0.5).then(|| rng.gen_range(1..=100));

    NewPerson {
        first_name,
        last_name,
        email,
        birthdate,
        bio,
        lucky_number,
    }
}

/// Insert `count` random persons. Stops at the first store error.
pub async fn seed_persons(repo: &dyn PersonsRepository, count: u32) -> anyhow::Result<()> {
    for _ in 0..count {
        // Fresh handle per person keeps the non-Send rng out of the await.
        let person = random_person(&mut rand::thread_rng());
        repo.insert(person).await?;
    }
    tracing::info!(count, "Seeded persons");
    Ok(())
}
