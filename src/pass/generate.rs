//! Password generation.

use std::fmt;

use log::debug;
use rand::Rng;
use zeroize::{Zeroize, Zeroizing};

use super::charset::{self, CharacterPool};
use super::output::PasswordSink;
use super::request::{GenerationRequest, InvalidRequest};
use super::strength::score_strength;

/// A generated password and the request that produced it.
///
/// The value is wiped from memory on drop.
#[derive(Clone)]
pub struct GeneratedPassword {
    value: Zeroizing<String>,
    request: GenerationRequest,
}

impl GeneratedPassword {
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn request(&self) -> &GenerationRequest {
        &self.request
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.value.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

impl fmt::Debug for GeneratedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeneratedPassword")
            .field("value", &"<redacted>")
            .field("request", &self.request)
            .finish()
    }
}

/// Generate a single password for `request`.
///
/// Every enabled class is represented when `length` allows it; otherwise the
/// guaranteed picks are truncated in enablement order.
pub fn synthesize<R: Rng + ?Sized>(
    request: &GenerationRequest,
    rng: &mut R,
) -> Result<GeneratedPassword, InvalidRequest> {
    let CharacterPool {
        pool,
        mut guaranteed,
    } = charset::build(request, rng)?;

    let mut chars: Vec<char> = Vec::with_capacity(request.length);
    chars.extend(guaranteed.iter().take(request.length));
    while chars.len() < request.length {
        chars.push(pool[rng.gen_range(0..pool.len())]);
    }

    shuffle(&mut chars, rng);

    let value = Zeroizing::new(chars.iter().collect::<String>());
    chars.zeroize();
    guaranteed.zeroize();

    Ok(GeneratedPassword {
        value,
        request: request.clone(),
    })
}

/// Generate `count` passwords and hand each one, with its strength, to `sink`.
/// Returns the number of passwords delivered.
pub fn generate_batch<R, S>(
    request: &GenerationRequest,
    count: usize,
    rng: &mut R,
    sink: &mut S,
) -> crate::Result<usize>
where
    R: Rng + ?Sized,
    S: PasswordSink + ?Sized,
{
    request.validate()?;

    for _ in 0..count {
        let password = synthesize(request, rng)?;
        let strength = score_strength(password.value());
        sink.accept(&password, &strength)?;
    }
    sink.finish()?;

    debug!(
        "generated {} password(s) of length {} from {} class(es)",
        count,
        request.length,
        request.classes.len()
    );
    Ok(count)
}

/// Fisher-Yates: a fresh draw from `0..=i` for every position.
fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}
