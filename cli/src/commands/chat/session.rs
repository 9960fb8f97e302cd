//! # Chat Session
//!
//! File: cli/src/commands/chat/session.rs
//!
//! ## Overview
//!
//! The ask / match / answer-or-learn loop. One turn looks like this:
//!
//! ```text
//! User: <question>
//!   ├─ "quit" (any case) or end of input ─────────► Bot: Goodbye!  (session ends)
//!   ├─ empty line ───────────────────────────────► prompt again
//!   ├─ matches a known question ─────────────────► Bot: <answer>
//!   └─ unknown ──► Bot: Sorry, I don't know the answer. Can you teach me?
//!                  Type the answer or "skip" to skip: <reply>
//!                    ├─ "skip" (any case) ───────► nothing stored
//!                    └─ anything else ──────────► entry appended, file rewritten,
//!                                                 Bot: Thank you! I learned a new response.
//! ```
//!
//! The session reads from any `BufRead` and writes to any `Write`, so the
//! whole exchange can be driven from a byte buffer in tests.
//!
use crate::core::error::{QabotError, Result};
use crate::knowledge::matcher::{self, eq_ignore_case};
use crate::knowledge::{store, KnowledgeBase, Matcher};
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing::{debug, info, warn};

const USER_PROMPT: &str = "User: ";
const TEACH_PROMPT: &str = "Type the answer or \"skip\" to skip: ";
const QUIT_COMMAND: &str = "quit";
const SKIP_COMMAND: &str = "skip";

/// Whether the loop should keep going after a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// An interactive conversation backed by a knowledge base file.
#[derive(Debug)]
pub struct ChatSession {
    knowledge_base: KnowledgeBase,
    store_path: PathBuf,
    matcher: Matcher,
}

impl ChatSession {
    pub fn new(knowledge_base: KnowledgeBase, store_path: PathBuf, matcher: Matcher) -> Self {
        Self {
            knowledge_base,
            store_path,
            matcher,
        }
    }

    /// The knowledge base as it stands, including entries learned this session.
    pub fn knowledge_base(&self) -> &KnowledgeBase {
        &self.knowledge_base
    }

    /// Runs turns until the user quits or input ends.
    pub fn run<R: BufRead, W: Write>(&mut self, input: &mut R, output: &mut W) -> Result<()> {
        info!(
            "Chat session started with {} known question(s), cutoff {}",
            self.knowledge_base.len(),
            self.matcher.cutoff()
        );
        while self.turn(input, output)? == Flow::Continue {}
        info!("Chat session ended");
        Ok(())
    }

    /// Handles one prompt/response exchange.
    ///
    /// A blank line is deliberately not matched or taught: it re-prompts, so an
    /// accidental Enter never stores an empty question.
    pub fn turn<R: BufRead, W: Write>(
        &mut self,
        input: &mut R,
        output: &mut W,
    ) -> std::result::Result<Flow, QabotError> {
        let line = match prompt(input, output, USER_PROMPT)? {
            Some(line) => line,
            None => {
                debug!("End of input reached at the question prompt");
                writeln!(output)?;
                say(output, "Goodbye!")?;
                return Ok(Flow::Exit);
            }
        };

        if line.is_empty() {
            return Ok(Flow::Continue);
        }
        if eq_ignore_case(&line, QUIT_COMMAND) {
            say(output, "Goodbye!")?;
            return Ok(Flow::Exit);
        }

        let questions: Vec<&str> = self.knowledge_base.questions().collect();
        let answer = self
            .matcher
            .find_best_match(&line, &questions)
            .map(|question| {
                matcher::answer_for(question, &self.knowledge_base)
                    .unwrap_or_default()
                    .to_string()
            });

        match answer {
            Some(answer) => {
                say(output, &answer)?;
                Ok(Flow::Continue)
            }
            None => self.teach(line, input, output),
        }
    }

    fn teach<R: BufRead, W: Write>(
        &mut self,
        question: String,
        input: &mut R,
        output: &mut W,
    ) -> std::result::Result<Flow, QabotError> {
        say(output, "Sorry, I don't know the answer. Can you teach me?")?;
        let reply = match prompt(input, output, TEACH_PROMPT)? {
            Some(reply) => reply,
            None => {
                debug!("End of input reached at the teach prompt; nothing learned");
                writeln!(output)?;
                return Ok(Flow::Exit);
            }
        };

        if eq_ignore_case(&reply, SKIP_COMMAND) {
            debug!("User skipped teaching {:?}", question);
            return Ok(Flow::Continue);
        }

        if reply.is_empty() {
            warn!("Learning an empty answer for {:?}", question);
        }
        info!("Learning new answer for {:?}", question);
        self.knowledge_base.learn(question, reply);
        store::save(&self.store_path, &self.knowledge_base);
        say(output, "Thank you! I learned a new response.")?;
        Ok(Flow::Continue)
    }
}

/// Shows `text` without a newline and reads one trimmed line.
/// Returns `None` at end of input.
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    text: &str,
) -> std::result::Result<Option<String>, QabotError> {
    write!(output, "{text}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn say<W: Write>(output: &mut W, message: &str) -> std::result::Result<(), QabotError> {
    writeln!(output, "Bot: {message}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knowledge::QaEntry;
    use std::io::Cursor;
    use tempfile::{tempdir, TempDir};

    struct Harness {
        _dir: TempDir,
        path: PathBuf,
        session: ChatSession,
    }

    fn harness(entries: Vec<QaEntry>) -> Harness {
        let dir = tempdir().unwrap();
        let path = dir.path().join("knowledge_base.json");
        let session = ChatSession::new(
            KnowledgeBase::new(entries),
            path.clone(),
            Matcher::default(),
        );
        Harness {
            _dir: dir,
            path,
            session,
        }
    }

    fn converse(session: &mut ChatSession, script: &str) -> String {
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut output = Vec::new();
        session.run(&mut input, &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn quit_ends_without_further_prompts() {
        let mut h = harness(vec![]);
        let transcript = converse(&mut h.session, "QUIT\nWhat is 2+2?\n");
        assert_eq!(transcript, "User: Bot: Goodbye!\n");
        assert!(!h.path.exists());
    }

    #[test]
    fn teaching_then_asking_again_answers() {
        let mut h = harness(vec![]);
        let transcript = converse(&mut h.session, "What is 2+2?\n4\nWhat is 2+2?\nquit\n");

        assert_eq!(
            transcript,
            "User: Bot: Sorry, I don't know the answer. Can you teach me?\n\
             Type the answer or \"skip\" to skip: Bot: Thank you! I learned a new response.\n\
             User: Bot: 4\n\
             User: Bot: Goodbye!\n"
        );
        assert_eq!(
            h.session.knowledge_base().entries(),
            &[QaEntry::new("What is 2+2?", "4")]
        );
        assert_eq!(
            store::try_load(&h.path).unwrap(),
            *h.session.knowledge_base()
        );
    }

    #[test]
    fn skip_leaves_knowledge_base_and_file_untouched() {
        let mut h = harness(vec![QaEntry::new("Hi", "Hello!")]);
        let transcript = converse(&mut h.session, "Tell me a joke\nSkip\nquit\n");

        assert!(transcript.contains("Can you teach me?"));
        assert!(!transcript.contains("learned"));
        assert_eq!(h.session.knowledge_base().len(), 1);
        assert!(!h.path.exists());
    }

    #[test]
    fn fuzzy_question_gets_stored_answer() {
        let mut h = harness(vec![QaEntry::new("What is your name?", "Qabot")]);
        let transcript = converse(&mut h.session, "what is your name\nquit\n");
        assert!(transcript.contains("Bot: Qabot\n"));
    }

    #[test]
    fn case_duplicate_questions_resolve_to_first_entry() {
        let mut h = harness(vec![
            QaEntry::new("Favourite colour?", "blue"),
            QaEntry::new("FAVOURITE COLOUR?", "red"),
        ]);
        let transcript = converse(&mut h.session, "favourite colour?\nquit\n");
        assert!(transcript.contains("Bot: blue\n"));
    }

    #[test]
    fn input_is_trimmed_before_matching_and_learning() {
        let mut h = harness(vec![]);
        converse(&mut h.session, "   Capital of France?  \n  Paris \nquit\n");
        assert_eq!(
            h.session.knowledge_base().entries(),
            &[QaEntry::new("Capital of France?", "Paris")]
        );
    }

    #[test]
    fn empty_lines_are_ignored() {
        let mut h = harness(vec![]);
        let transcript = converse(&mut h.session, "\n   \nquit\n");
        assert_eq!(transcript, "User: User: User: Bot: Goodbye!\n");
        assert!(h.session.knowledge_base().is_empty());
    }

    #[test]
    fn end_of_input_behaves_like_quit() {
        let mut h = harness(vec![]);
        let transcript = converse(&mut h.session, "");
        assert_eq!(transcript, "User: \nBot: Goodbye!\n");
    }

    #[test]
    fn end_of_input_while_teaching_learns_nothing() {
        let mut h = harness(vec![]);
        let transcript = converse(&mut h.session, "Unknown question\n");
        assert!(transcript.ends_with("Type the answer or \"skip\" to skip: \n"));
        assert!(h.session.knowledge_base().is_empty());
        assert!(!h.path.exists());
    }

    #[test]
    fn failed_save_keeps_entry_in_memory() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();
        let mut session = ChatSession::new(
            KnowledgeBase::default(),
            blocker.join("kb.json"),
            Matcher::default(),
        );

        let transcript = converse(&mut session, "Ping?\nPong\nping?\nquit\n");

        assert!(transcript.contains("Bot: Thank you! I learned a new response.\n"));
        assert!(transcript.contains("Bot: Pong\n"));
        assert_eq!(session.knowledge_base().len(), 1);
    }

    #[test]
    fn turn_reports_exit_on_quit() {
        let mut h = harness(vec![]);
        let mut input = Cursor::new(b"quit\n".to_vec());
        let mut output = Vec::new();
        assert_eq!(h.session.turn(&mut input, &mut output).unwrap(), Flow::Exit);
    }
}
