//! Sample-data bootstrap.
//!
//! Populates a freshly migrated store with the fixture roster and order
//! backlog the dashboard demos against: three elves, six hand-written
//! orders, and a generated batch of Wooden Trains orders stuck in
//! Jingleberry's Quality Check queue. This is a test-fixture concern, not a
//! runtime feature; startup invokes it only when `SEED_SAMPLE_DATA` allows,
//! and it refuses to run against a store that already holds profiles.

pub mod data;

use chrono::{Datelike, Local, NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, EntityTrait, PaginatorTrait};

use crate::{
    error::Error,
    model::toy_order::{DEFAULT_DUE_DATE, ToyStatus},
    seed::data::*,
};

struct SeedOrder {
    id: &'static str,
    child_name: &'static str,
    age: i32,
    location: &'static str,
    toy: &'static str,
    category: &'static str,
    assigned_elf: &'static str,
    status: ToyStatus,
    notes: &'static str,
    nice_list_score: i32,
}

/// Seeds the store with sample elves and toy orders.
///
/// Idempotent across restarts of a persistent store: seeding is skipped
/// when any elf profile already exists.
pub async fn seed_database(db: &DatabaseConnection) -> Result<(), Error> {
    let existing = entity::prelude::ElfProfile::find().count(db).await?;

    if existing > 0 {
        tracing::info!("Store already holds {} elf profiles, skipping seed", existing);
        return Ok(());
    }

    seed_elves(db).await?;
    seed_fixed_orders(db).await?;
    seed_jingleberry_trains(db).await?;

    tracing::info!("Seeded sample elves and toy orders");

    Ok(())
}

async fn seed_elves(db: &DatabaseConnection) -> Result<(), Error> {
    let current_year = Local::now().year();

    // Profile images were JPEGs loaded from disk in the reference fixture;
    // elves start without one here and upload via the profile editor.
    let elves: [(&str, &str, Option<NaiveDate>); 3] = [
        (
            "Jingleberry Sparkletoes",
            "Wooden Trains",
            NaiveDate::from_ymd_opt(current_year - 127, 12, 1),
        ),
        (
            "Snowflake Tinselwhisk",
            "Teddy Bears",
            NaiveDate::from_ymd_opt(current_year - 43, 12, 15),
        ),
        (
            "Peppermint Candycane",
            "Video Games",
            NaiveDate::from_ymd_opt(current_year - 15, 1, 10),
        ),
    ];

    for (name, specialty, start_date) in elves {
        let start_date = start_date
            .map(|date| date.format("%Y-%m-%d").to_string())
            .unwrap_or_default();

        let elf = entity::elf_profile::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            specialty: ActiveValue::Set(specialty.to_string()),
            service_start_date: ActiveValue::Set(start_date),
            profile_image: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        elf.insert(db).await?;
    }

    Ok(())
}

async fn seed_fixed_orders(db: &DatabaseConnection) -> Result<(), Error> {
    let orders = [
        SeedOrder {
            id: "1",
            child_name: "Emily Johnson",
            age: 7,
            location: "New York, USA",
            toy: "Deluxe Teddy Bear",
            category: "Teddy Bears",
            assigned_elf: "Snowflake Tinselwhisk",
            status: ToyStatus::ToDo,
            notes: "Deer Santa, I realy want a Delux Teddy Bear! I promis Ive been realy good this yeer. Can you make it extra soft and hugable? Love, Emily",
            nice_list_score: 98,
        },
        SeedOrder {
            id: "2",
            child_name: "Marcus Chen",
            age: 10,
            location: "San Francisco, USA",
            toy: "MagicBox Game Console",
            category: "Video Games",
            assigned_elf: "Peppermint Candycane",
            status: ToyStatus::InProgress,
            notes: "Hi Santa! I would love a MagicBox Game Console for Christmas! If possible, could you include extra controlers so I can play with my freinds? And maybe 3 game cartridges? Thanks! Marcus",
            nice_list_score: 85,
        },
        SeedOrder {
            id: "3",
            child_name: "Sofia Rodriguez",
            age: 5,
            location: "Madrid, Spain",
            toy: "Classic Wooden Train with 12 Cars",
            category: "Wooden Trains",
            assigned_elf: "Jingleberry Sparkletoes",
            status: ToyStatus::QualityCheck,
            notes: "Deer Santa, I want a Clasic Wooden Trane with 12 Cars pleese! I luv tranes so much! Can you paynt it with prety culurs? Thank you Santa! Sofia",
            nice_list_score: 100,
        },
        SeedOrder {
            id: "4",
            child_name: "Oliver Smith",
            age: 8,
            location: "London, UK",
            toy: "Builder Blocks Mega Set",
            category: "Puzzles",
            assigned_elf: "Jingleberry Sparkletoes",
            status: ToyStatus::ReadyToDeliver,
            notes: "Dear Santa, I would realy like the Builder Blocks Mega Set with 1000 peices! I want to build a huge castle. Can you include the instrution booklet so I know how to make cool things? Oliver",
            nice_list_score: 92,
        },
        SeedOrder {
            id: "5",
            child_name: "Aisha Patel",
            age: 6,
            location: "Mumbai, India",
            toy: "Enchanted Dollhouse",
            category: "Dolls",
            assigned_elf: "Snowflake Tinselwhisk",
            status: ToyStatus::ToDo,
            notes: "Deer Santa, I dreem of haveing an Enchanted Dollhowse! I want one with three flors and lites that reely work. It would be so majical! Love, Aisha",
            nice_list_score: 96,
        },
        SeedOrder {
            id: "6",
            child_name: "Lucas Dubois",
            age: 9,
            location: "Paris, France",
            toy: "Turbo Racer RC Car",
            category: "Electronics",
            assigned_elf: "Peppermint Candycane",
            status: ToyStatus::InProgress,
            notes: "Hello Santa! I realy want a Turbo Racer RC Car this year! It would be amazeing if it comes with a rechargable battery so I can race it all the time. Merci! Lucas",
            nice_list_score: 78,
        },
    ];

    for order in orders {
        insert_order(db, order).await?;
    }

    Ok(())
}

/// Generates Jingleberry's infamous Wooden Trains backlog, all stuck in
/// Quality Check.
async fn seed_jingleberry_trains(db: &DatabaseConnection) -> Result<(), Error> {
    for i in 0..TRAIN_COUNT {
        let first_name = SAMPLE_FIRST_NAMES[i % SAMPLE_FIRST_NAMES.len()];
        let last_name = SAMPLE_LAST_NAMES[(i / SAMPLE_FIRST_NAMES.len()) % SAMPLE_LAST_NAMES.len()];
        let toy = TRAIN_TYPES[i % TRAIN_TYPES.len()];

        let greeting = LETTER_GREETINGS[i % LETTER_GREETINGS.len()];
        let want = LETTER_WANTS[i % LETTER_WANTS.len()];
        let promise = LETTER_PROMISES[i % LETTER_PROMISES.len()];
        let extra = LETTER_EXTRAS[i % LETTER_EXTRAS.len()];
        let closing = LETTER_CLOSINGS[i % LETTER_CLOSINGS.len()];

        let notes =
            format!("{greeting}, {want} a {toy}! {promise}. {extra} {closing}, {first_name}");

        let order = entity::toy_order::ActiveModel {
            id: ActiveValue::Set((7 + i).to_string()),
            child_name: ActiveValue::Set(format!("{first_name} {last_name}")),
            age: ActiveValue::Set(4 + (i % 5) as i32),
            location: ActiveValue::Set(SAMPLE_LOCATIONS[i % SAMPLE_LOCATIONS.len()].to_string()),
            toy: ActiveValue::Set(toy.to_string()),
            category: ActiveValue::Set("Wooden Trains".to_string()),
            assigned_elf: ActiveValue::Set("Jingleberry Sparkletoes".to_string()),
            status: ActiveValue::Set(ToyStatus::QualityCheck.as_str().to_string()),
            due_date: ActiveValue::Set(DEFAULT_DUE_DATE.to_string()),
            notes: ActiveValue::Set(Some(notes)),
            nice_list_score: ActiveValue::Set(88 + (i % 13) as i32),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
        };

        order.insert(db).await?;
    }

    Ok(())
}

async fn insert_order(db: &DatabaseConnection, order: SeedOrder) -> Result<(), Error> {
    let order = entity::toy_order::ActiveModel {
        id: ActiveValue::Set(order.id.to_string()),
        child_name: ActiveValue::Set(order.child_name.to_string()),
        age: ActiveValue::Set(order.age),
        location: ActiveValue::Set(order.location.to_string()),
        toy: ActiveValue::Set(order.toy.to_string()),
        category: ActiveValue::Set(order.category.to_string()),
        assigned_elf: ActiveValue::Set(order.assigned_elf.to_string()),
        status: ActiveValue::Set(order.status.as_str().to_string()),
        due_date: ActiveValue::Set(DEFAULT_DUE_DATE.to_string()),
        notes: ActiveValue::Set(Some(order.notes.to_string())),
        nice_list_score: ActiveValue::Set(order.nice_list_score),
        created_at: ActiveValue::Set(Utc::now().naive_utc()),
    };

    order.insert(db).await?;

    Ok(())
}
