// Argument parsing and backend dispatch.

use std::collections::hash_map::RandomState;
use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;

use crate::backend::{DenseMap, JudyMap, SparseMap, SppMap, StdMap};
use crate::bench;
use crate::hash::{T1haSeeded, XxSeeded};

pub const USAGE: &str = "usage: mapbench <judy|spp|dense|sparse|std> <std|xxhash|t1ha> <n_iterations>";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendKind {
    Judy,
    Spp,
    Dense,
    Sparse,
    Std,
}

impl FromStr for BackendKind {
    type Err = UsageError;

    fn from_str(s: &str) -> Result<BackendKind, UsageError> {
        match s {
            "judy" => Ok(BackendKind::Judy),
            "spp" => Ok(BackendKind::Spp),
            "dense" => Ok(BackendKind::Dense),
            "sparse" => Ok(BackendKind::Sparse),
            "std" => Ok(BackendKind::Std),
            other => Err(UsageError::UnknownBackend(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashKind {
    Std,
    XxHash,
    T1ha,
}

impl FromStr for HashKind {
    type Err = UsageError;

    fn from_str(s: &str) -> Result<HashKind, UsageError> {
        match s {
            "std" => Ok(HashKind::Std),
            "xxhash" => Ok(HashKind::XxHash),
            "t1ha" => Ok(HashKind::T1ha),
            other => Err(UsageError::UnknownHash(other.to_string())),
        }
    }
}

#[derive(Debug)]
pub enum UsageError {
    MissingArgs,
    UnknownBackend(String),
    UnknownHash(String),
    BadCount(String),
}

impl fmt::Display for UsageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UsageError::MissingArgs => write!(f, "expected 3 arguments"),
            UsageError::UnknownBackend(name) => write!(f, "unknown container type: {}", name),
            UsageError::UnknownHash(name) => write!(f, "unsupported hash function: {}", name),
            UsageError::BadCount(value) => write!(f, "bad iteration count: {}", value),
        }
    }
}

impl std::error::Error for UsageError {}

/// A fully parsed invocation.
#[derive(Debug, Clone, Copy)]
pub struct Args {
    pub backend: BackendKind,
    pub hash: HashKind,
    pub count: u64,
}

/// Parse the arguments following the program name. The hash function
/// must parse even for the judy backend, which then ignores it.
pub fn parse<I>(args: I) -> Result<Args, UsageError>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    let backend = args.next().ok_or(UsageError::MissingArgs)?;
    let hash = args.next().ok_or(UsageError::MissingArgs)?;
    let count = args.next().ok_or(UsageError::MissingArgs)?;

    Ok(Args {
        backend: backend.parse()?,
        hash: hash.parse()?,
        count: count
            .parse()
            .map_err(|_| UsageError::BadCount(count.clone()))?,
    })
}

/// Build the selected container and run the phases against it.
pub fn execute<W: Write>(args: &Args, out: &mut W) -> io::Result<()> {
    let count = args.count;
    match args.backend {
        BackendKind::Judy => bench::run(&mut JudyMap::new(), count, out),
        BackendKind::Spp => match args.hash {
            HashKind::Std => bench::run(&mut SppMap::with_hasher(RandomState::new()), count, out),
            HashKind::XxHash => bench::run(&mut SppMap::with_hasher(XxSeeded), count, out),
            HashKind::T1ha => bench::run(&mut SppMap::with_hasher(T1haSeeded), count, out),
        },
        BackendKind::Dense => match args.hash {
            HashKind::Std => bench::run(&mut DenseMap::with_hasher(RandomState::new()), count, out),
            HashKind::XxHash => bench::run(&mut DenseMap::with_hasher(XxSeeded), count, out),
            HashKind::T1ha => bench::run(&mut DenseMap::with_hasher(T1haSeeded), count, out),
        },
        BackendKind::Sparse => match args.hash {
            HashKind::Std => {
                bench::run(&mut SparseMap::with_hasher(RandomState::new()), count, out)
            }
            HashKind::XxHash => bench::run(&mut SparseMap::with_hasher(XxSeeded), count, out),
            HashKind::T1ha => bench::run(&mut SparseMap::with_hasher(T1haSeeded), count, out),
        },
        BackendKind::Std => match args.hash {
            HashKind::Std => bench::run(&mut StdMap::with_hasher(RandomState::new()), count, out),
            HashKind::XxHash => bench::run(&mut StdMap::with_hasher(XxSeeded), count, out),
            HashKind::T1ha => bench::run(&mut StdMap::with_hasher(T1haSeeded), count, out),
        },
    }
}
