use std::fs::File;
use std::path::Path;

use bio::io::fasta;

use crate::constants::{
    FASTA_EXTENSIONS, GENBANK_EXTENSIONS, REFERENCE_RECORD_DESCRIPTION, REFERENCE_RECORD_ID,
};
use crate::types::{GuideError, TargetMap};

use super::Sequence;

/// A named sequence record parsed from an input file
pub type SequenceRecord = (String, Sequence);

/// Input formats selected by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SequenceFormat {
    Fasta,
    Genbank,
}

fn detect_format(path: &Path) -> Result<SequenceFormat, GuideError> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    if FASTA_EXTENSIONS.contains(&extension.as_str()) {
        Ok(SequenceFormat::Fasta)
    } else if GENBANK_EXTENSIONS.contains(&extension.as_str()) {
        Ok(SequenceFormat::Genbank)
    } else {
        Err(GuideError::UnsupportedFormat(path.display().to_string()))
    }
}

fn read_fasta_records(path: &Path) -> Result<Vec<SequenceRecord>, GuideError> {
    let file = File::open(path)?;
    let reader = fasta::Reader::new(file);
    let mut records = Vec::new();

    for result in reader.records() {
        let record = result.map_err(|e| GuideError::ParseError(e.to_string()))?;
        records.push((record.id().to_string(), Sequence::new(record.seq())));
    }

    Ok(records)
}

fn read_genbank_records(path: &Path) -> Result<Vec<SequenceRecord>, GuideError> {
    let seqs = gb_io::reader::parse_file(path)
        .map_err(|e| GuideError::ParseError(e.to_string()))?;

    let mut records = Vec::new();
    for seq in seqs {
        let name = seq.name.ok_or_else(|| {
            GuideError::ParseError(format!(
                "GenBank record without a locus name in {}",
                path.display()
            ))
        })?;
        records.push((name, Sequence::new(&seq.seq)));
    }

    Ok(records)
}

/// Reads all sequence records from a FASTA or GenBank file.
///
/// The format is chosen by file extension; sequences are uppercased on load.
///
/// # Errors
///
/// Returns [`GuideError::UnsupportedFormat`] for an unrecognized extension,
/// [`GuideError::IoError`] if the file cannot be read, and
/// [`GuideError::ParseError`] for malformed records.
pub fn read_sequence_records<P: AsRef<Path>>(path: P) -> Result<Vec<SequenceRecord>, GuideError> {
    let path = path.as_ref();
    match detect_format(path)? {
        SequenceFormat::Fasta => read_fasta_records(path),
        SequenceFormat::Genbank => read_genbank_records(path),
    }
}

/// Loads the target-region file into a map keyed by record id.
///
/// # Errors
///
/// Returns [`GuideError::ParseError`] when two records share an id, plus any
/// error from [`read_sequence_records`].
pub fn load_targets<P: AsRef<Path>>(path: P) -> Result<TargetMap, GuideError> {
    let path = path.as_ref();
    let mut targets = TargetMap::new();

    for (name, sequence) in read_sequence_records(path)? {
        if targets.insert(name.clone(), sequence).is_some() {
            return Err(GuideError::ParseError(format!(
                "Duplicate record id '{}' in {}",
                name,
                path.display()
            )));
        }
    }

    Ok(targets)
}

/// Concatenates every record of every background file, in argument order,
/// into a single genome background sequence.
///
/// # Errors
///
/// Propagates the first load error from any of the files.
pub fn load_genome_background<P: AsRef<Path>>(paths: &[P]) -> Result<Sequence, GuideError> {
    let mut background = Vec::new();

    for path in paths {
        for (_, sequence) in read_sequence_records(path)? {
            background.extend_from_slice(sequence.as_bytes());
        }
    }

    Ok(Sequence::new(background))
}

/// Persists the genome background as a single FASTA record.
///
/// The record is written once per run, with id `refgenome`, so downstream
/// tools can reuse the exact background this run scored against.
///
/// # Errors
///
/// Returns [`GuideError::IoError`] if the file cannot be created or written.
pub fn write_reference_genome<P: AsRef<Path>>(
    path: P,
    genome: &Sequence,
) -> Result<(), GuideError> {
    let file = File::create(path.as_ref())?;
    let mut writer = fasta::Writer::new(file);
    writer.write(
        REFERENCE_RECORD_ID,
        Some(REFERENCE_RECORD_DESCRIPTION),
        genome.as_bytes(),
    )?;
    writer.flush()?;
    Ok(())
}
