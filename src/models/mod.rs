pub mod pegawai;
