//! Heuristic content extraction.
//!
//! The pipeline runs as a bounded retry loop: a strict pass that prunes
//! unlikely-candidate containers, then, when the result comes up short, a
//! relaxed pass with the pruning disabled. Each pass works on a fresh clone
//! of the source document, so the caller's tree is never mutated and a
//! failed attempt needs no rollback.

pub mod assemble;
pub mod clean;
pub mod collect;
pub mod score;
pub mod state;

use crate::dom::{self, Document};
use crate::options::Options;
use assemble::region_text;
use state::ScoreState;

/// One strict-or-relaxed pass, paired with the length of the text it found.
struct Attempt {
    region: Document,
    text_length: usize,
}

/// Run the full extraction pipeline.
///
/// Returns the assembled content region as soon as an attempt clears
/// `options.char_threshold`. When neither pass does, the longest non-empty
/// attempt wins. `None` means no attempt produced any text at all, and the
/// caller should fall back to a non-heuristic strategy.
#[must_use]
pub fn grab_article(doc: &Document, options: &Options) -> Option<Document> {
    let mut strip_unlikely = true;
    let mut attempts: Vec<Attempt> = Vec::new();

    loop {
        let working = dom::clone_document(doc);

        if let Some(region) = run_attempt(&working, options, strip_unlikely) {
            let text_length = region_text(&region).chars().count();
            if text_length >= options.char_threshold {
                return Some(region);
            }
            if text_length > 0 {
                attempts.push(Attempt {
                    region,
                    text_length,
                });
            }
        }

        if strip_unlikely {
            strip_unlikely = false;
            continue;
        }

        attempts.sort_by(|a, b| b.text_length.cmp(&a.text_length));
        return attempts.into_iter().next().map(|a| a.region);
    }
}

/// Collector, scorer, assembler and cleaner over one working clone. `None`
/// only when the document has no body to extract from.
fn run_attempt(working: &Document, options: &Options, strip_unlikely: bool) -> Option<Document> {
    let body_nodes = working.select("body").nodes().to_vec();
    let body = body_nodes.first()?;

    let to_score = collect::collect_candidates(body, options, strip_unlikely);

    let mut scores = ScoreState::new();
    score::score_elements(&to_score, &mut scores);

    let region = assemble::assemble_region(working, body, &mut scores, options);
    clean::clean_region(&region, options);

    Some(region)
}
