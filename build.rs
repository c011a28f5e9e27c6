// Author: Eshan Roy
// SPDX-License-Identifier: MIT

use vergen::EmitBuilder;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Short SHA and commit date for `version::version_string`.
    EmitBuilder::builder().git_sha(true).git_commit_date().emit()?;
    Ok(())
}
