#![allow(dead_code)]

use assert_cmd::Command;
use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Target fixture: geneA has one forward candidate (offset 4, guide AAAA),
/// geneB has one reverse candidate (remapped offset 13, guide AAAA).
pub const TWO_GENE_TARGETS: &str = ">geneA\nTTTTAAAAGGCCCC\n>geneB\nTTTTTTTCCTTTTT\n";

/// Background fixture holding the AAAA guide four times across both strands
pub const BACKGROUND: &str = ">bg\nTTTTAAAAGGCCCCTTTTAAAAGGCCCC\n";

/// Writes a named fixture file into the test directory
pub fn write_fixture(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

/// A command for the optiguide binary
pub fn optiguide() -> Command {
    Command::cargo_bin("optiguide").unwrap()
}

/// Runs optiguide over the given fixtures with `-l 4` and extra arguments,
/// returning the report text.
pub fn run_discovery<P: AsRef<std::ffi::OsStr>>(
    dir: &TempDir,
    targets: &Path,
    genomes: &[P],
    extra_args: &[&str],
) -> String {
    let report = dir.path().join("report.tsv");
    let reference = dir.path().join("refgenome.fasta");

    let mut cmd = optiguide();
    cmd.arg("-t").arg(targets).arg("-g");
    for genome in genomes {
        cmd.arg(genome);
    }
    cmd.arg("-l")
        .arg("4")
        .arg("-o")
        .arg(&report)
        .arg("-r")
        .arg(&reference)
        .args(extra_args);
    cmd.assert().success();

    fs::read_to_string(report).unwrap()
}

/// SHA-256 digest of a file's bytes, hex-encoded
pub fn sha256_file(path: &Path) -> String {
    let bytes = fs::read(path).unwrap();
    format!("{:x}", Sha256::digest(bytes))
}
