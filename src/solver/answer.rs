/*
answer.rs

Copyright 2026 The Mazelog contributors

This file is part of Mazelog.

Mazelog is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Mazelog is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Mazelog. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Decode the resolver answer into a [`Path`].

use log::debug;
use regex::Regex;
use std::sync::LazyLock;

use crate::error::ResolverFault;
use crate::generator::grid::Coordinate;
use crate::generator::path::Path;

static BINDING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*Path\s*=\s*").expect("valid regex"));

/// Decode an answer such as `Path = [[0, 0], [1, 0]].`
///
/// The `Path =` binding and the final period are optional.
///
/// # Errors
///
/// Anything that is not a non-empty list of `[x, y]` pairs of non-negative integers is a
/// [`ResolverFault::MalformedAnswer`]. An empty list is never returned as a path.
pub fn decode(answer: &str) -> Result<Path, ResolverFault> {
    let unbound = BINDING.replace(answer, "");
    let body: &str = unbound.trim();
    let body: &str = body.strip_suffix('.').unwrap_or(body).trim_end();

    if !(body.starts_with('[') && body.ends_with(']')) {
        return Err(ResolverFault::MalformedAnswer(format!(
            "`{answer}` is not a list"
        )));
    }

    let pairs: Vec<(usize, usize)> = serde_json::from_str(body)
        .map_err(|e| ResolverFault::MalformedAnswer(format!("`{answer}`: {e}")))?;
    if pairs.is_empty() {
        return Err(ResolverFault::MalformedAnswer("empty path".to_string()));
    }
    debug!("Decoded {} cells", pairs.len());
    Ok(Path::from_vec(
        pairs.into_iter().map(|(x, y)| Coordinate::new(x, y)).collect(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_binding() {
        let path = decode("Path = [[0, 0], [0, 1], [1, 1]]").unwrap();
        assert_eq!(
            path.get(),
            &vec![
                Coordinate::new(0, 0),
                Coordinate::new(0, 1),
                Coordinate::new(1, 1)
            ]
        );
    }

    #[test]
    fn binding_and_period_are_optional() {
        assert_eq!(decode("[[0,0],[1,0]]").unwrap().len(), 2);
        assert_eq!(decode("  Path=[[0, 0], [1, 0]].  ").unwrap().len(), 2);
    }

    #[test]
    fn unparsable_text_is_malformed() {
        for answer in [
            "",
            "Path = ",
            "true.",
            "Path = [[0, 0], [1,",
            "Path = [[0, 0], [a, b]]",
            "Path = [[0, -1]]",
            "Path = [[0, 0, 0]]",
            "Path = [X | _]",
        ] {
            assert!(
                matches!(decode(answer), Err(ResolverFault::MalformedAnswer(_))),
                "answer {answer:?} was accepted"
            );
        }
    }

    #[test]
    fn empty_list_is_not_a_path() {
        assert_eq!(
            decode("Path = []"),
            Err(ResolverFault::MalformedAnswer("empty path".to_string()))
        );
    }
}
