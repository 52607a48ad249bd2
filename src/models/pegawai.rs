use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

#[derive(sqlx::FromRow, Serialize, Debug, Clone, PartialEq)]
pub struct Pegawai {
    pub id_pegawai: i32,
    pub nm_pegawai: String,
    pub alamat_pegawai: String,
    pub tgl_lahir_pegawai: NaiveDate,
    pub id_m_status_pegawai: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The four business fields written by create and update.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct PegawaiFields {
    pub nm_pegawai: String,
    pub alamat_pegawai: String,
    pub tgl_lahir_pegawai: NaiveDate,
    pub id_m_status_pegawai: i32,
}
