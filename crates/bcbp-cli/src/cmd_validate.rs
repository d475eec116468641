/// Implementation of `bcbp validate`.
///
/// Two stages, mirroring the library's own layering:
///
/// 1. The lightweight shape validator — length, format code, leg-count
///    sanity, first-leg field patterns — which needs no structural
///    decode.
/// 2. A full structural decode, which exercises every declared-size
///    consistency check.
///
/// # Success output
///
/// ```text
/// ✓ Shape: 60+ characters, format M, 1 leg declared
/// ✓ Structure: 1 leg decoded, all declared sizes consistent
/// ✓ Trailer: no security data
/// ```
///
/// # Failure output
///
/// ```text
/// ✗ Shape: flight number "ABCDE" is not 4 digits plus optional suffix
/// ✗ Structure: leg 0 conditional block is inconsistent: ...
/// ```
///
/// The command exits with code 0 only when both stages pass (the main
/// dispatcher converts `Err` to exit code 1).
use anyhow::{Result, anyhow};
use bcbp_decoder::BcbpDecoder;
use bcbp_types::validate;

use crate::{ValidateArgs, load_input};

pub fn run(args: &ValidateArgs) -> Result<()> {
    let input = load_input(&args.input)?;

    let issues = validate(&input);
    if issues.is_empty() {
        println!(
            "✓ Shape: {}+ characters, format {}, {} leg{} declared",
            60,
            input.chars().next().unwrap_or('?'),
            input.chars().nth(1).unwrap_or('?'),
            if input.chars().nth(1) == Some('1') { "" } else { "s" }
        );
    } else {
        for issue in &issues {
            println!("✗ Shape: {issue}");
        }
    }

    match BcbpDecoder::decode(&input) {
        Ok(pass) => {
            println!(
                "✓ Structure: {} leg{} decoded, all declared sizes consistent",
                pass.legs.len(),
                if pass.legs.len() == 1 { "" } else { "s" }
            );
            if pass.security.is_absent() {
                println!("✓ Trailer: no security data");
            } else if let Some(length) = pass.security.declared_length {
                println!("✓ Trailer: security data present ({length} characters)");
            } else {
                println!("✓ Trailer: opaque trailing data consumed");
            }
            if issues.is_empty() {
                Ok(())
            } else {
                Err(anyhow!("shape validation failed"))
            }
        }
        Err(e) => {
            println!("✗ Structure: {e}");
            Err(anyhow!("validation failed"))
        }
    }
}
