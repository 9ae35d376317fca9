use chrono::NaiveDate;
use dotenvy::dotenv;
use envconfig::Envconfig;
use sqlx::mysql::{MySqlConnectOptions, MySqlConnection, MySqlSslMode};
use sqlx::Connection;

type Error = Box<dyn std::error::Error + Send + Sync>;

// Standalone binary: carries its own env wiring instead of sharing the
// service crate's modules.
#[derive(Envconfig)]
struct SeedConfig {
    #[envconfig(from = "DB_HOST", default = "localhost")]
    db_host: String,

    #[envconfig(from = "DB_NAME", default = "medicine_inventory")]
    db_name: String,

    #[envconfig(from = "DB_USER", default = "root")]
    db_user: String,

    #[envconfig(from = "DB_PASSWORD", default = "password")]
    db_password: String,

    #[envconfig(from = "DB_PORT", default = "3306")]
    db_port: u16,

    #[envconfig(from = "DB_SSL", default = "true")]
    db_ssl: bool,
}

impl SeedConfig {
    fn connect_options(&self) -> MySqlConnectOptions {
        let ssl_mode = if self.db_ssl {
            MySqlSslMode::Preferred
        } else {
            MySqlSslMode::Disabled
        };
        MySqlConnectOptions::new()
            .host(&self.db_host)
            .port(self.db_port)
            .username(&self.db_user)
            .password(&self.db_password)
            .database(&self.db_name)
            .ssl_mode(ssl_mode)
    }
}

struct SeedMedicine {
    name: &'static str,
    quantity: i32,
    expiry_date: NaiveDate,
    category: &'static str,
}

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid seed date")
}

fn seed_medicines() -> Vec<SeedMedicine> {
    vec![
        SeedMedicine {
            name: "Aspirin",
            quantity: 500,
            expiry_date: ymd(2027, 6, 30),
            category: "painkiller",
        },
        SeedMedicine {
            name: "Amoxicillin",
            quantity: 300,
            expiry_date: ymd(2026, 12, 31),
            category: "antibiotic",
        },
        SeedMedicine {
            name: "Lisinopril",
            quantity: 400,
            expiry_date: ymd(2027, 3, 15),
            category: "blood pressure",
        },
        SeedMedicine {
            name: "Levothyroxine",
            quantity: 250,
            expiry_date: ymd(2028, 1, 31),
            category: "thyroid",
        },
        SeedMedicine {
            name: "Metformin",
            quantity: 350,
            expiry_date: ymd(2027, 9, 30),
            category: "diabetes",
        },
        SeedMedicine {
            name: "Amlodipine",
            quantity: 200,
            expiry_date: ymd(2026, 11, 30),
            category: "blood pressure",
        },
        SeedMedicine {
            name: "Omeprazole",
            quantity: 450,
            expiry_date: ymd(2027, 7, 31),
            category: "antacid",
        },
        SeedMedicine {
            name: "Albuterol",
            quantity: 150,
            expiry_date: ymd(2028, 4, 30),
            category: "respiratory",
        },
        SeedMedicine {
            name: "Gabapentin",
            quantity: 300,
            expiry_date: ymd(2027, 5, 31),
            category: "anticonvulsant",
        },
        SeedMedicine {
            name: "Metoprolol",
            quantity: 275,
            expiry_date: ymd(2026, 10, 31),
            category: "beta blocker",
        },
    ]
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));
    dotenv().ok();

    let config = SeedConfig::init_from_env()?;
    let mut conn = MySqlConnection::connect_with(&config.connect_options()).await?;

    let medicines = seed_medicines();
    let count = medicines.len();
    for medicine in medicines {
        sqlx::query(
            "INSERT INTO medicines (name, quantity, expiry_date, category) VALUES (?, ?, ?, ?)",
        )
        .bind(medicine.name)
        .bind(medicine.quantity)
        .bind(medicine.expiry_date)
        .bind(medicine.category)
        .execute(&mut conn)
        .await?;
    }

    conn.close().await?;
    log::info!("Seeded {} medicines", count);
    Ok(())
}
