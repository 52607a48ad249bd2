pub mod pegawai;

use chrono::NaiveDate;
use log::info;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::config::Config;

const CREATE_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS pegawai (
        id_pegawai SERIAL PRIMARY KEY,
        nm_pegawai VARCHAR(60) NOT NULL,
        alamat_pegawai VARCHAR(100) NOT NULL,
        tgl_lahir_pegawai DATE NOT NULL,
        id_m_status_pegawai INT NOT NULL,
        updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
"#;

const SAMPLE_DATA: [(&str, &str, (i32, u32, u32), i32); 3] = [
    ("John Doe", "123 Main St, City", (1990, 5, 15), 1),
    ("Jane Smith", "456 Oak Ave, Town", (1985, 12, 3), 2),
    ("Robert Johnson", "789 Pine Rd, Village", (1992, 8, 22), 1),
];

/// Builds the process-wide pool. Connections are opened on demand; waiters queue
/// for up to `acquire_timeout` once `max_connections` are in use.
pub async fn create_pool(config: &Config) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .connect(&config.database_url)
        .await
}

pub async fn init_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query(CREATE_TABLE).execute(pool).await?;
    info!("Table pegawai created or already exists");
    Ok(())
}

/// Inserts the sample rows only when the table is empty. Returns the number of rows inserted.
pub async fn seed_if_empty(pool: &PgPool) -> Result<u64, sqlx::Error> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM pegawai")
        .fetch_one(pool)
        .await?;
    if count > 0 {
        return Ok(0);
    }

    let mut tx = pool.begin().await?;
    let mut inserted = 0;
    for (name, address, (year, month, day), status_id) in SAMPLE_DATA {
        let birth_date = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or_else(|| sqlx::Error::Protocol(format!("invalid sample date {}-{}-{}", year, month, day)))?;
        inserted += sqlx::query(
            "INSERT INTO pegawai (nm_pegawai, alamat_pegawai, tgl_lahir_pegawai, id_m_status_pegawai, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, NOW(), NOW())",
        )
        .bind(name)
        .bind(address)
        .bind(birth_date)
        .bind(status_id)
        .execute(&mut *tx)
        .await?
        .rows_affected();
    }
    tx.commit().await?;

    info!("Sample data inserted ({} rows)", inserted);
    Ok(inserted)
}

pub async fn bootstrap(pool: &PgPool, seed: bool) -> Result<(), sqlx::Error> {
    init_schema(pool).await?;
    if seed {
        seed_if_empty(pool).await?;
    }
    info!("Database initialization completed successfully");
    Ok(())
}
