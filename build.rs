// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Embeds the git SHA and commit date used by `gitacct::version`.

use vergen::EmitBuilder;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("cargo:rerun-if-changed=build.rs");

    // Missing git metadata (e.g. a source tarball) only produces warnings.
    EmitBuilder::builder()
        .git_sha(false)
        .git_commit_date()
        .emit()?;
    Ok(())
}
