//! Core library for bedtime
//!
//! This crate implements the **Functional Core** of the bedtime story generator,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! The bedtime project uses a two-crate architecture to enforce separation of concerns:
//!
//! - **`bedtime_core`** (this crate): Pure transformation functions with zero I/O
//! - **`bedtime`**: HTTP calls to the model, the CLI and the web server (the Imperative Shell)
//!
//! ## Functional Core Principles
//!
//! All functions in this crate adhere to these principles:
//!
//! - **Pure functions**: Same input always produces the same output
//! - **No side effects**: No I/O operations, no network calls
//! - **Deterministic**: Randomness (the illustration seed) is passed in by the caller
//! - **Testable**: Can be tested with simple fixture data, no mocking required
//!
//! # Module Organization
//!
//! - [`story`]: Prompt building, fence stripping and story parsing
//! - [`gemini`]: Wire types for the Gemini `generateContent` endpoint
//! - [`illustration`]: Illustration URL construction
//! - [`topics`]: Preset story topics
//! - [`slot`]: The single "current story" slot and its generation counter
//!
//! # Example Usage
//!
//! ```rust
//! use bedtime_core::story::{build_prompt, parse_story, StoryRequest};
//!
//! let request = StoryRequest::new("Space Journey to the Moon").with_child_name("Mia");
//! let prompt = build_prompt(&request);
//! assert!(prompt.contains("Mia"));
//!
//! // Pretend the model answered with a fenced JSON block
//! let reply = "```json\n{\"title\": \"Mia's Moon Adventure\", \"content\": \"Once upon a time, Mia...\"}\n```";
//! let story = parse_story(reply).unwrap();
//! assert_eq!(story.title, "Mia's Moon Adventure");
//! ```

pub mod gemini;
pub mod illustration;
pub mod slot;
pub mod story;
pub mod topics;
