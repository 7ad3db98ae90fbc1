#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use speech_script::event::{EventSource, Handler, Multicast};
use speech_script::stt::{
    AudioState, CompareOptions, Completion, Grammar, GrammarElement, RecognitionEngine,
    RecognitionResult, RecognizeMode, RecognizedPhrase, RecognizerEvent, RecognizerEventArgs,
    RecognizerInfo, RecognizerTimeout, SettingValue,
};
use speech_script::tts::{
    InstalledVoice, Rate, SynthesisEngine, SynthesizerEvent, SynthesizerEventArgs,
    SynthesizerState, VoiceFilter, VoiceGender, VoiceInfo, Volume,
};
use speech_script::value::{Callback, Value};
use speech_script::{Error, Result};

/// Collects the payloads a callback is invoked with.
pub fn recorder() -> (Callback, Arc<Mutex<Vec<Vec<Value>>>>) {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let callback = {
        let calls = calls.clone();
        Callback::named("recorder", move |args| {
            calls.lock().unwrap().push(args.to_vec());
            Ok(Value::Null)
        })
    };
    (callback, calls)
}

/// A recognizer that "hears" only what is passed to `emulate_recognize`.
pub struct LoopbackRecognizer {
    events: Multicast<RecognizerEventArgs>,
    state: Mutex<RecognizerState>,
    fail_detach: AtomicBool,
}

struct RecognizerState {
    culture: String,
    grammars: Vec<(String, Vec<String>)>,
    timeouts: HashMap<RecognizerTimeout, Duration>,
    max_alternates: i32,
    settings: HashMap<String, SettingValue>,
    listening: bool,
    disposed: bool,
}

impl LoopbackRecognizer {
    pub fn emit(&self, args: RecognizerEventArgs) -> usize {
        self.events.emit(&args)
    }

    pub fn handler_count(&self, kind: RecognizerEvent) -> usize {
        self.events.handler_count(kind)
    }

    pub fn set_fail_detach(&self, fail: bool) {
        self.fail_detach.store(fail, Ordering::SeqCst);
    }

    pub fn is_listening(&self) -> bool {
        self.state.lock().unwrap().listening
    }

    pub fn is_disposed(&self) -> bool {
        self.state.lock().unwrap().disposed
    }

    fn matches(&self, text: &str, options: CompareOptions) -> Option<RecognitionResult> {
        let state = self.state.lock().unwrap();
        let same = |phrase: &String| {
            if options.contains(CompareOptions::IGNORE_CASE) {
                phrase.eq_ignore_ascii_case(text)
            } else {
                phrase == text
            }
        };
        state.grammars.iter().find_map(|(name, phrases)| {
            phrases.iter().find(|phrase| same(phrase)).map(|phrase| {
                let mut recognized = RecognizedPhrase::new(phrase.as_str());
                recognized.grammar = Some(name.clone());
                RecognitionResult::from(recognized)
            })
        })
    }

    fn recognize_now(&self, text: &str, options: CompareOptions) -> Option<RecognitionResult> {
        let result = self.matches(text, options);
        match &result {
            Some(result) => self.emit(RecognizerEventArgs::SpeechRecognized(result.clone())),
            None => self.emit(RecognizerEventArgs::SpeechRecognitionRejected(
                RecognizedPhrase::new(text).into(),
            )),
        };
        result
    }
}

/// Expands the phrases and choices of a grammar into every sentence it accepts.
fn sentences(elements: &[GrammarElement]) -> Vec<String> {
    let mut accepted = vec![String::new()];
    for element in elements {
        let words: Vec<String> = match element {
            GrammarElement::Phrase(text) => vec![text.clone()],
            GrammarElement::Choices(choices) => choices.clone(),
            GrammarElement::Group(inner) => sentences(inner),
            _ => continue,
        };
        accepted = accepted
            .iter()
            .flat_map(|prefix| {
                words.iter().map(move |word| {
                    if prefix.is_empty() {
                        word.clone()
                    } else {
                        format!("{} {}", prefix, word)
                    }
                })
            })
            .collect();
    }
    accepted
}

impl EventSource<RecognizerEventArgs> for LoopbackRecognizer {
    fn attach(&self, kind: RecognizerEvent, handler: Handler<RecognizerEventArgs>) -> Result<()> {
        self.events.attach(kind, handler);
        Ok(())
    }

    fn detach(&self, kind: RecognizerEvent, handler: &Handler<RecognizerEventArgs>) -> Result<bool> {
        if self.fail_detach.load(Ordering::SeqCst) {
            return Err(Error::engine("detach refused"));
        }
        Ok(self.events.detach(kind, handler))
    }
}

impl RecognitionEngine for LoopbackRecognizer {
    fn new(culture: Option<&str>) -> Result<Self> {
        Ok(Self {
            events: Multicast::new(),
            state: Mutex::new(RecognizerState {
                culture: culture.unwrap_or("en-US").to_string(),
                grammars: Vec::new(),
                timeouts: HashMap::new(),
                max_alternates: 10,
                settings: HashMap::new(),
                listening: false,
                disposed: false,
            }),
            fail_detach: AtomicBool::new(false),
        })
    }

    fn installed_recognizers() -> Result<Vec<RecognizerInfo>> {
        Ok(vec![RecognizerInfo {
            name: "Loopback Recognizer".into(),
            id: "loopback".into(),
            culture: "en-US".into(),
            description: "Recognizes emulated input only".into(),
        }])
    }

    fn set_input_to_default_audio_device(&self) -> Result<()> {
        Ok(())
    }

    fn recognizer_info(&self) -> Result<RecognizerInfo> {
        let culture = self.state.lock().unwrap().culture.clone();
        Ok(RecognizerInfo {
            name: "Loopback Recognizer".into(),
            id: "loopback".into(),
            culture,
            description: "Recognizes emulated input only".into(),
        })
    }

    fn audio_level(&self) -> Result<i32> {
        Ok(0)
    }

    fn audio_state(&self) -> Result<AudioState> {
        Ok(AudioState::Stopped)
    }

    fn timeout(&self, which: RecognizerTimeout) -> Result<Duration> {
        Ok(self.state.lock().unwrap().timeouts.get(&which).copied().unwrap_or_default())
    }

    fn set_timeout(&self, which: RecognizerTimeout, value: Duration) -> Result<()> {
        self.state.lock().unwrap().timeouts.insert(which, value);
        Ok(())
    }

    fn max_alternates(&self) -> Result<i32> {
        Ok(self.state.lock().unwrap().max_alternates)
    }

    fn set_max_alternates(&self, value: i32) -> Result<()> {
        self.state.lock().unwrap().max_alternates = value;
        Ok(())
    }

    fn grammar_names(&self) -> Result<Vec<String>> {
        Ok(self.state.lock().unwrap().grammars.iter().map(|(name, _)| name.clone()).collect())
    }

    fn load_grammar(&self, grammar: &Grammar) -> Result<()> {
        grammar.srgs()?;
        let entry = (grammar.name(), sentences(grammar.elements()));
        self.state.lock().unwrap().grammars.push(entry);
        Ok(())
    }

    fn load_grammar_async(&self, grammar: &Grammar) -> Result<()> {
        self.load_grammar(grammar)?;
        self.emit(RecognizerEventArgs::LoadGrammarCompleted {
            completion: Completion::default(),
            grammar: grammar.name(),
        });
        Ok(())
    }

    fn unload_grammar(&self, grammar: &Grammar) -> Result<()> {
        let name = grammar.name();
        let mut state = self.state.lock().unwrap();
        match state.grammars.iter().position(|(n, _)| *n == name) {
            Some(pos) => {
                state.grammars.remove(pos);
                Ok(())
            }
            None => Err(Error::InvalidOperation(format!("grammar {} is not loaded", name))),
        }
    }

    fn unload_all_grammars(&self) -> Result<()> {
        self.state.lock().unwrap().grammars.clear();
        Ok(())
    }

    fn emulate_recognize(
        &self,
        text: &str,
        options: CompareOptions,
    ) -> Result<Option<RecognitionResult>> {
        Ok(self.recognize_now(text, options))
    }

    fn emulate_recognize_async(&self, text: &str, options: CompareOptions) -> Result<()> {
        let result = self.recognize_now(text, options);
        self.emit(RecognizerEventArgs::EmulateRecognizeCompleted {
            completion: Completion::default(),
            result,
        });
        Ok(())
    }

    fn recognize(&self, _timeout: Option<Duration>) -> Result<Option<RecognitionResult>> {
        Ok(None)
    }

    fn recognize_async(&self, _mode: RecognizeMode) -> Result<()> {
        self.state.lock().unwrap().listening = true;
        Ok(())
    }

    fn recognize_async_cancel(&self) -> Result<()> {
        self.state.lock().unwrap().listening = false;
        self.emit(RecognizerEventArgs::RecognizeCompleted {
            completion: Completion {
                error: None,
                cancelled: true,
            },
            babble_timeout: false,
            initial_silence_timeout: false,
            input_stream_ended: false,
            result: None,
        });
        Ok(())
    }

    fn recognize_async_stop(&self) -> Result<()> {
        self.state.lock().unwrap().listening = false;
        Ok(())
    }

    fn request_recognizer_update(&self) -> Result<()> {
        self.emit(RecognizerEventArgs::RecognizerUpdateReached);
        Ok(())
    }

    fn query_setting(&self, name: &str) -> Result<Option<SettingValue>> {
        Ok(self.state.lock().unwrap().settings.get(name).cloned())
    }

    fn update_setting(&self, name: &str, value: SettingValue) -> Result<()> {
        if name.is_empty() {
            return Err(Error::engine("setting names cannot be empty"));
        }
        self.state.lock().unwrap().settings.insert(name.to_string(), value);
        Ok(())
    }

    fn dispose(&self) -> Result<()> {
        self.state.lock().unwrap().disposed = true;
        Ok(())
    }
}

/// A synthesizer that "speaks" by raising events and remembering the text.
pub struct LoopbackSynthesizer {
    events: Multicast<SynthesizerEventArgs>,
    state: Mutex<SynthesizerModel>,
}

struct SynthesizerModel {
    rate: Rate,
    volume: Volume,
    state: SynthesizerState,
    voice: Option<VoiceInfo>,
    voices: Vec<InstalledVoice>,
    lexicons: Vec<(String, String)>,
    spoken: Vec<String>,
}

fn voice(name: &str, culture: &str, gender: VoiceGender, enabled: bool) -> InstalledVoice {
    InstalledVoice {
        info: VoiceInfo {
            gender,
            culture: culture.into(),
            ..VoiceInfo::new(name)
        },
        enabled,
    }
}

impl LoopbackSynthesizer {
    pub fn spoken(&self) -> Vec<String> {
        self.state.lock().unwrap().spoken.clone()
    }

    pub fn lexicons(&self) -> Vec<(String, String)> {
        self.state.lock().unwrap().lexicons.clone()
    }

    pub fn handler_count(&self, kind: SynthesizerEvent) -> usize {
        self.events.handler_count(kind)
    }

    pub fn emit(&self, args: SynthesizerEventArgs) -> usize {
        self.events.emit(&args)
    }

    fn change_state(&self, state: SynthesizerState) {
        let previous_state = std::mem::replace(&mut self.state.lock().unwrap().state, state);
        if previous_state != state {
            self.emit(SynthesizerEventArgs::StateChanged {
                previous_state,
                state,
            });
        }
    }

    fn render(&self, text: &str) {
        self.emit(SynthesizerEventArgs::SpeakStarted);
        self.change_state(SynthesizerState::Speaking);
        for word in text.split_whitespace() {
            self.emit(SynthesizerEventArgs::SpeakProgress {
                text: word.to_string(),
            });
        }
        self.state.lock().unwrap().spoken.push(text.to_string());
        self.change_state(SynthesizerState::Ready);
        self.emit(SynthesizerEventArgs::SpeakCompleted {
            error: None,
            cancelled: false,
        });
    }
}

impl EventSource<SynthesizerEventArgs> for LoopbackSynthesizer {
    fn attach(&self, kind: SynthesizerEvent, handler: Handler<SynthesizerEventArgs>) -> Result<()> {
        self.events.attach(kind, handler);
        Ok(())
    }

    fn detach(
        &self,
        kind: SynthesizerEvent,
        handler: &Handler<SynthesizerEventArgs>,
    ) -> Result<bool> {
        Ok(self.events.detach(kind, handler))
    }
}

impl SynthesisEngine for LoopbackSynthesizer {
    fn new() -> Result<Self> {
        let voices = vec![
            voice("David", "en-US", VoiceGender::Male, true),
            voice("Zira", "en-US", VoiceGender::Female, true),
            voice("Hedda", "de-DE", VoiceGender::Female, true),
            voice("Broken", "en-US", VoiceGender::Neutral, false),
        ];
        Ok(Self {
            events: Multicast::new(),
            state: Mutex::new(SynthesizerModel {
                rate: Rate::default(),
                volume: Volume::new(100),
                state: SynthesizerState::Ready,
                voice: Some(voices[0].info.clone()),
                voices,
                lexicons: Vec::new(),
                spoken: Vec::new(),
            }),
        })
    }

    fn rate(&self) -> Result<Rate> {
        Ok(self.state.lock().unwrap().rate)
    }

    fn set_rate(&self, rate: Rate) -> Result<()> {
        self.state.lock().unwrap().rate = rate;
        Ok(())
    }

    fn volume(&self) -> Result<Volume> {
        Ok(self.state.lock().unwrap().volume)
    }

    fn set_volume(&self, volume: Volume) -> Result<()> {
        self.state.lock().unwrap().volume = volume;
        Ok(())
    }

    fn state(&self) -> Result<SynthesizerState> {
        Ok(self.state.lock().unwrap().state)
    }

    fn voice(&self) -> Result<Option<VoiceInfo>> {
        Ok(self.state.lock().unwrap().voice.clone())
    }

    fn select_voice(&self, name: &str) -> Result<()> {
        let info = {
            let mut state = self.state.lock().unwrap();
            let info = state
                .voices
                .iter()
                .find(|v| v.enabled && v.info.name == name)
                .map(|v| v.info.clone())
                .ok_or_else(|| Error::InvalidOperation(format!("no voice named {}", name)))?;
            state.voice = Some(info.clone());
            info
        };
        self.emit(SynthesizerEventArgs::VoiceChanged {
            voice: Some(info),
        });
        Ok(())
    }

    fn installed_voices(&self, filter: &VoiceFilter) -> Result<Vec<InstalledVoice>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .voices
            .iter()
            .filter(|v| match filter {
                VoiceFilter::All => true,
                VoiceFilter::CurrentCulture => v.info.culture == "en-US",
                VoiceFilter::Culture(culture) => v.info.culture == *culture,
            })
            .cloned()
            .collect())
    }

    fn add_lexicon(&self, uri: &str, media_type: &str) -> Result<()> {
        self.state.lock().unwrap().lexicons.push((uri.to_string(), media_type.to_string()));
        Ok(())
    }

    fn remove_lexicon(&self, uri: &str) -> Result<()> {
        self.state.lock().unwrap().lexicons.retain(|(u, _)| u != uri);
        Ok(())
    }

    fn speak(&self, text: &str) -> Result<()> {
        self.render(text);
        Ok(())
    }

    fn speak_async(&self, text: &str) -> Result<()> {
        self.render(text);
        Ok(())
    }

    fn pause(&self) -> Result<()> {
        self.change_state(SynthesizerState::Paused);
        Ok(())
    }

    fn resume(&self) -> Result<()> {
        self.change_state(SynthesizerState::Ready);
        Ok(())
    }

    fn cancel_all(&self) -> Result<()> {
        Ok(())
    }

    fn dispose(&self) -> Result<()> {
        Ok(())
    }
}
