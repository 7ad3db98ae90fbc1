#![warn(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! Scripting-language facades over native speech recognition and speech synthesis engines.
//!
//! # Features
//!
//! The goal of this crate is to let a dynamically-typed embedded scripting language drive a speech
//! engine the host provides. It does not implement speech recognition or synthesis itself. The
//! engines are described by the [`RecognitionEngine`](stt::RecognitionEngine) and
//! [`SynthesisEngine`](tts::SynthesisEngine) traits, and the host plugs its native implementation
//! into them.
//!
//! ## Facades
//!
//! Every wrapped class is a facade: an object that exposes a closed set of operations and
//! properties reachable by name. Scripts see facades through [`Object`](value::Object), which
//! resolves a member name exactly once and reports unknown names as
//! [`Error::MissingMember`].
//!
//! The available facades are:
//! * [`SpeechRecognizer`](stt::SpeechRecognizer), which forwards to a recognition engine;
//! * [`SpeechSynthesizer`](tts::SpeechSynthesizer), which forwards to a synthesis engine;
//! * [`GrammarBuilder`](stt::GrammarBuilder) and [`Grammar`](stt::Grammar), which describe the
//!   phrases a recognizer can recognize.
//!
//! ## Events
//!
//! Native engines raise multicast events from their own threads. A script subscribes a callback
//! to an event kind, and the facade attaches a native handler on its behalf. The
//! [`EventRegistry`](event::EventRegistry) remembers which native handler belongs to which
//! callback, so that unsubscribing the same callback detaches exactly that handler. Unsubscribing
//! a callback that was never subscribed is not an error; the facade simply reports `false`.
//!
//! Event payloads reach the script as generic [`Record`](value::Record)s, which map field names to
//! dynamic [`Value`](value::Value)s.
//!
//! # Threading
//!
//! All facades are `Send` and `Sync`. Engines may deliver events on any thread, concurrently with
//! subscribe and unsubscribe calls. Script callbacks are never invoked while an internal lock is
//! held, so a callback may subscribe or unsubscribe other callbacks.

pub mod dispatch;
mod error;
pub mod event;
pub mod stt;
pub mod tts;
pub mod value;

#[cfg(feature = "tokio-events")]
pub mod tokio;

pub use error::Error;

/// The type returned by facade functions and engine methods.
pub type Result<T> = std::result::Result<T, Error>;
