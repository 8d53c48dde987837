use std::collections::BTreeMap;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use thiserror::Error;
use tracing::{debug, info};

use crate::catalog::models::{Catalog, Course, RawCatalog};

pub mod models;

/// Failure to obtain a raw catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("can't read the catalog: {0}")]
    Io(#[from] io::Error),

    #[error("the catalog isn't in the expected shape: {0}")]
    Json(#[from] serde_json::Error),
}

/// Read a raw catalog from JSON
pub fn load(reader: impl Read) -> Result<RawCatalog, CatalogError> {
    Ok(serde_json::from_reader(reader)?)
}

/// Read a raw catalog from a file, `-` means the standard input
pub fn load_path(path: &Path) -> Result<RawCatalog, CatalogError> {
    if path == Path::new("-") {
        debug!("reading the catalog from stdin");
        return load(io::stdin().lock());
    }

    debug!(path = %path.display(), "reading the catalog");
    load(BufReader::new(File::open(path)?))
}

/// Parse the meeting time of every course
///
/// The title and the keys are kept as is, `raw` is left untouched.
#[must_use]
pub fn enrich_schedule(raw: &RawCatalog) -> Catalog {
    let courses = raw
        .courses
        .iter()
        .map(|(id, course)| (id.clone(), Course::enrich(id, course)))
        .collect::<BTreeMap<_, _>>();

    let unparsed = courses
        .values()
        .filter(|course| course.time.is_none())
        .inspect(|course| debug!(id = %course.id, meets = %course.meets, "no meeting time"))
        .count();
    info!(
        courses = courses.len(),
        unparsed, "catalog `{}` enriched", raw.title
    );

    Catalog {
        title: raw.title.clone(),
        courses,
    }
}
