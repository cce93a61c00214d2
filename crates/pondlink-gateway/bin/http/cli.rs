use clap::{Parser, ValueEnum};
use pondlink_core::alphabet::{BASE62, BINARY, DECIMAL, HEX};
use pondlink_core::Alphabet;
use std::fmt::{Display, Formatter};
use std::net::SocketAddr;

pub const LISTEN_ADDR_ENV: &str = "POND_LISTEN_ADDR";
pub const BASE_URL_ENV: &str = "POND_BASE_URL";
pub const CAPACITY_ENV: &str = "POND_CAPACITY";
pub const STORAGE_BACKEND_ENV: &str = "POND_STORAGE";
pub const ALPHABET_ENV: &str = "POND_ALPHABET";
pub const LOG_FORMAT_ENV: &str = "POND_LOG_FORMAT";

pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_BASE_URL: &str = "https://s.pond.audio/";
pub const DEFAULT_CAPACITY: usize = 1 << 23;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StorageBackendArg {
    /// Dense vector indexed by identifier.
    #[value(name = "slots")]
    Slots,
    /// Hash map preallocated to the full capacity.
    #[value(name = "hash")]
    Hash,
}

impl Display for StorageBackendArg {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageBackendArg::Slots => write!(f, "slots"),
            StorageBackendArg::Hash => write!(f, "hash"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AlphabetArg {
    #[value(name = "base62")]
    Base62,
    #[value(name = "hex")]
    Hex,
    #[value(name = "decimal")]
    Decimal,
    #[value(name = "binary")]
    Binary,
}

impl AlphabetArg {
    pub fn alphabet(self) -> &'static Alphabet {
        match self {
            AlphabetArg::Base62 => &BASE62,
            AlphabetArg::Hex => &HEX,
            AlphabetArg::Decimal => &DECIMAL,
            AlphabetArg::Binary => &BINARY,
        }
    }
}

impl Display for AlphabetArg {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            AlphabetArg::Base62 => write!(f, "base62"),
            AlphabetArg::Hex => write!(f, "hex"),
            AlphabetArg::Decimal => write!(f, "decimal"),
            AlphabetArg::Binary => write!(f, "binary"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    #[value(name = "text")]
    Text,
    #[value(name = "json")]
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "pondlink", about = "Link shortener HTTP server")]
pub struct CLI {
    #[arg(long, env = LISTEN_ADDR_ENV, default_value = DEFAULT_LISTEN_ADDR)]
    pub listen_addr: SocketAddr,

    /// Prefix prepended to every token in returned short links.
    #[arg(long, env = BASE_URL_ENV, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Maximum number of links; identifiers past it are refused.
    #[arg(long, env = CAPACITY_ENV, default_value_t = DEFAULT_CAPACITY)]
    pub capacity: usize,

    #[arg(
        long,
        env = STORAGE_BACKEND_ENV,
        value_enum,
        default_value_t = StorageBackendArg::Slots
    )]
    pub storage: StorageBackendArg,

    #[arg(
        long,
        env = ALPHABET_ENV,
        value_enum,
        default_value_t = AlphabetArg::Base62
    )]
    pub alphabet: AlphabetArg,

    #[arg(long, env = LOG_FORMAT_ENV, value_enum, default_value_t = LogFormatArg::Text)]
    pub log_format: LogFormatArg,
}
