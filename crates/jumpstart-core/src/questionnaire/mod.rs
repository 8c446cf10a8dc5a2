//! The ordered questionnaire that produces [`PluginMetadata`]
//!
//! Fields are asked in a fixed order so that every suggestion is derived from
//! answers that are already final:
//!
//! - package -> namespace
//! - package -> plugin name -> plugin slug
//!
//! An answer that fails validation is reported and the same question is asked
//! again, as many times as it takes. There is no way to skip a question or go
//! back to an earlier one.

pub mod suggest;
pub mod validate;

use crate::error::PromptError;
use crate::identity::{Identity, IdentityProvider};
use crate::metadata::{Field, PluginMetadata};
use crate::prompter::{Prompter, Question};
use std::collections::BTreeMap;

/// Knobs that change which questions are asked
#[derive(Debug, Clone, Copy, Default)]
pub struct QuestionnaireOptions {
    /// Ask for the author email separately instead of folding it into the author
    pub ask_author_email: bool,
}

/// Drives the prompts and assembles the metadata record
pub struct Questionnaire<I> {
    identity: I,
    options: QuestionnaireOptions,
}

impl<I: IdentityProvider> Questionnaire<I> {
    pub fn new(identity: I) -> Self {
        Self {
            identity,
            options: QuestionnaireOptions::default(),
        }
    }

    pub fn with_options(mut self, options: QuestionnaireOptions) -> Self {
        self.options = options;
        self
    }

    /// Fields in the order they are asked
    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        Field::ALL
            .into_iter()
            .filter(move |field| *field != Field::AuthorEmail || self.options.ask_author_email)
    }

    /// Ask every question and return the completed record
    pub fn run<P: Prompter + ?Sized>(&self, prompter: &mut P) -> Result<PluginMetadata, PromptError> {
        let identity = self.identity.identity();
        let mut draft = Draft::default();

        for field in self.fields() {
            let default = self.suggestion(field, &draft, &identity);
            let value = ask_until_valid(prompter, Question::new(field, default.as_deref()))?;
            tracing::debug!(%field, %value, "answer accepted");
            draft.set(field, value);
        }

        Ok(draft.finish())
    }

    /// Default for `field`, computed only from answers already in `draft`
    fn suggestion(&self, field: Field, draft: &Draft, identity: &Identity) -> Option<String> {
        let suggested = match field {
            Field::Namespace => draft.get(Field::Package).map(suggest::namespace),
            Field::PluginName => draft.get(Field::Package).map(suggest::plugin_name),
            Field::PluginSlug => draft.get(Field::PluginName).map(suggest::plugin_slug),
            Field::Version => Some(suggest::DEFAULT_VERSION.to_string()),
            Field::Author => Some(suggest::author(identity, !self.options.ask_author_email)),
            Field::AuthorEmail => Some(suggest::author_email(identity)),
            Field::License => Some(suggest::DEFAULT_LICENSE.to_string()),
            Field::Package | Field::Description | Field::Url | Field::AuthorUrl => None,
        };
        suggested.filter(|value| !value.is_empty())
    }
}

fn ask_until_valid<P: Prompter + ?Sized>(
    prompter: &mut P,
    question: Question<'_>,
) -> Result<String, PromptError> {
    loop {
        let raw = prompter.ask(&question)?;
        let answer = match raw.trim() {
            "" => question.default.unwrap_or_default(),
            answer => answer,
        };

        match validate::validate(question.field, answer) {
            Ok(value) => return Ok(value),
            Err(error) => {
                tracing::debug!(field = %question.field, answer, reason = error.reason, "answer rejected");
                prompter.reject(&question, &error)?;
            }
        }
    }
}

/// Answers collected so far
#[derive(Debug, Default)]
struct Draft(BTreeMap<Field, String>);

impl Draft {
    fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    fn set(&mut self, field: Field, value: String) {
        self.0.insert(field, value);
    }

    fn finish(mut self) -> PluginMetadata {
        let author_email = self.0.remove(&Field::AuthorEmail);
        let mut take = |field: Field| self.0.remove(&field).unwrap_or_default();

        PluginMetadata {
            package: take(Field::Package),
            namespace: take(Field::Namespace),
            plugin_name: take(Field::PluginName),
            plugin_slug: take(Field::PluginSlug),
            version: take(Field::Version),
            description: take(Field::Description),
            url: take(Field::Url),
            author: take(Field::Author),
            author_email,
            author_url: take(Field::AuthorUrl),
            license: take(Field::License),
        }
    }
}
