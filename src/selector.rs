use crate::artifacts::Candidate;
use crate::error::ResolveError;
use crate::prompt::CandidatePrompt;
use log::debug;

/// Reduce the candidates to one. A single candidate is taken as is; several go to the
/// prompt exactly once.
pub fn select(
    mut candidates: Vec<Candidate>,
    prompt: &mut dyn CandidatePrompt,
) -> Result<Candidate, ResolveError> {
    match candidates.len() {
        0 => Err(ResolveError::NoCandidates),
        1 => candidates.pop().ok_or(ResolveError::NoCandidates),
        n => {
            debug!("{} candidates, asking the user", n);
            let index = prompt
                .choose(&candidates)
                .ok_or(ResolveError::SelectionCancelled)?;
            if index >= n {
                debug!("Prompt returned index {} out of {}", index, n);
                return Err(ResolveError::SelectionCancelled);
            }
            Ok(candidates.swap_remove(index))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    struct Scripted {
        answer: Option<usize>,
        calls: usize,
    }

    impl CandidatePrompt for Scripted {
        fn choose(&mut self, _candidates: &[Candidate]) -> Option<usize> {
            self.calls += 1;
            self.answer
        }
    }

    fn candidate(stem: &str) -> Candidate {
        Candidate::new(
            stem,
            ".",
            PathBuf::from(format!("{stem}.elf")),
            PathBuf::from(format!("{stem}.map")),
        )
    }

    #[test]
    fn empty_list_is_an_error() {
        let mut prompt = Scripted { answer: Some(0), calls: 0 };
        assert!(matches!(
            select(vec![], &mut prompt),
            Err(ResolveError::NoCandidates)
        ));
        assert_eq!(prompt.calls, 0);
    }

    #[test]
    fn single_candidate_skips_prompt() {
        let mut prompt = Scripted { answer: None, calls: 0 };
        let chosen = select(vec![candidate("app")], &mut prompt).unwrap();
        assert_eq!(chosen.display_label, "app");
        assert_eq!(prompt.calls, 0);
    }

    #[test]
    fn several_candidates_prompt_once() {
        let mut prompt = Scripted { answer: Some(2), calls: 0 };
        let chosen = select(
            vec![candidate("a"), candidate("b"), candidate("c")],
            &mut prompt,
        )
        .unwrap();
        assert_eq!(chosen.display_label, "c");
        assert_eq!(prompt.calls, 1);
    }

    #[test]
    fn cancel_and_bad_index_fail() {
        let mut prompt = Scripted { answer: None, calls: 0 };
        assert!(matches!(
            select(vec![candidate("a"), candidate("b")], &mut prompt),
            Err(ResolveError::SelectionCancelled)
        ));

        let mut prompt = Scripted { answer: Some(5), calls: 0 };
        assert!(matches!(
            select(vec![candidate("a"), candidate("b")], &mut prompt),
            Err(ResolveError::SelectionCancelled)
        ));
    }
}
