use strum_macros::{EnumString, IntoStaticStr};

use crate::dispatch::{Args, Facade};
use crate::event::{EventKind, Subscriptions};
use crate::value::{Object, Record, Value};
use crate::{Error, Result};

use super::phrase::result_value;
use super::{
    CompareOptions, Grammar, RecognitionEngine, RecognizeMode, RecognizerEvent,
    RecognizerEventArgs, RecognizerTimeout, SettingValue,
};

/// Script facade over a [`RecognitionEngine`].
pub struct SpeechRecognizer<E: RecognitionEngine> {
    engine: E,
    events: Subscriptions<RecognizerEventArgs>,
}

/// The operations of [`SpeechRecognizer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
#[allow(missing_docs)]
pub enum RecognizerMethod {
    Dispose,
    EmulateRecognize,
    EmulateRecognizeAsync,
    LoadGrammar,
    LoadGrammarAsync,
    QuerySetting,
    Recognize,
    RecognizeAsync,
    RecognizeAsyncCancel,
    RecognizeAsyncStop,
    RequestRecognizerUpdate,
    SubscribeEvent,
    UpdateSetting,
    UnloadAllGrammars,
    UnloadGrammar,
    UnsubscribeEvent,
}

/// The properties of [`SpeechRecognizer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
#[allow(missing_docs)]
pub enum RecognizerProperty {
    AudioLevel,
    AudioState,
    BabbleTimeout,
    EndSilenceTimeout,
    EndSilenceTimeoutAmbiguous,
    Grammars,
    InitialSilenceTimeout,
    MaxAlternatives,
    RecognizerInfo,
}

impl RecognizerProperty {
    fn timeout(self) -> Option<RecognizerTimeout> {
        match self {
            Self::BabbleTimeout => Some(RecognizerTimeout::Babble),
            Self::EndSilenceTimeout => Some(RecognizerTimeout::EndSilence),
            Self::EndSilenceTimeoutAmbiguous => Some(RecognizerTimeout::EndSilenceAmbiguous),
            Self::InitialSilenceTimeout => Some(RecognizerTimeout::InitialSilence),
            _ => None,
        }
    }
}

impl<E: RecognitionEngine> SpeechRecognizer<E> {
    /// Wraps an existing engine.
    pub fn new(engine: E) -> Self {
        Self {
            engine,
            events: Subscriptions::new(Self::OBJECT_TYPE),
        }
    }

    /// Creates the facade from script constructor arguments: an optional culture name. The new
    /// engine listens to the default recording device.
    pub fn create(args: &[Value]) -> Result<Self> {
        let args = Args::new("SpeechRecognizer", args);
        let engine = E::new(args.opt_string(0)?)?;
        engine.set_input_to_default_audio_device()?;
        Ok(Self::new(engine))
    }

    /// Borrows the wrapped engine.
    pub fn engine(&self) -> &E {
        &self.engine
    }

    fn emulate_recognize(&self, args: Args) -> Result<Value> {
        let result = self.engine.emulate_recognize(args.string(0)?, compare_options(args)?)?;
        Ok(result_value(result.as_ref()))
    }

    fn emulate_recognize_async(&self, args: Args) -> Result<Value> {
        self.engine.emulate_recognize_async(args.string(0)?, compare_options(args)?)?;
        Ok(Value::Null)
    }

    fn load_grammar(&self, args: Args) -> Result<Value> {
        let grammar = args.object::<Grammar>(0)?;
        self.engine.load_grammar(grammar)?;
        grammar.set_loaded(true);
        Ok(Value::Null)
    }

    fn load_grammar_async(&self, args: Args) -> Result<Value> {
        let grammar = args.object::<Grammar>(0)?;
        self.engine.load_grammar_async(grammar)?;
        grammar.set_loaded(true);
        Ok(Value::Null)
    }

    fn unload_grammar(&self, args: Args) -> Result<Value> {
        let grammar = args.object::<Grammar>(0)?;
        self.engine.unload_grammar(grammar)?;
        grammar.set_loaded(false);
        Ok(true.into())
    }

    fn query_setting(&self, args: Args) -> Result<Value> {
        Ok(self.engine.query_setting(args.string(0)?)?.into())
    }

    fn update_setting(&self, args: Args) -> Result<Value> {
        let name = args.string(0)?;
        let value = match args.get(1) {
            Some(Value::Number(n)) => SettingValue::Int(*n as i32),
            Some(Value::String(s)) => SettingValue::Text(s.clone()),
            _ => return Ok(false.into()),
        };
        match self.engine.update_setting(name, value) {
            Ok(()) => Ok(true.into()),
            Err(err) => {
                tracing::debug!(setting = name, error = %err, "engine rejected setting");
                Ok(false.into())
            }
        }
    }

    fn recognize(&self, args: Args) -> Result<Value> {
        let result = self.engine.recognize(args.opt_millis(0)?)?;
        Ok(result_value(result.as_ref()))
    }

    fn recognize_async(&self, args: Args) -> Result<Value> {
        let mode = match args.get(0) {
            Some(_) => args.ordinal(0)?,
            None => RecognizeMode::Single,
        };
        self.engine.recognize_async(mode)?;
        Ok(Value::Null)
    }

    fn subscribe_event(&self, args: Args) -> Result<Value> {
        let kind = RecognizerEvent::from_arg(Self::OBJECT_TYPE, &args, 0)?;
        let callback = args.callback(1)?;
        self.events.subscribe(&self.engine, kind, callback.clone())?;
        Ok(Value::Null)
    }

    fn unsubscribe_event(&self, args: Args) -> Result<Value> {
        let kind = RecognizerEvent::from_arg(Self::OBJECT_TYPE, &args, 0)?;
        let callback = args.callback(1)?;
        Ok(self.events.unsubscribe(&self.engine, kind, callback)?.into())
    }
}

fn compare_options(args: Args) -> Result<CompareOptions> {
    match args.get(1) {
        Some(_) => Ok(CompareOptions(args.number(1)? as u32)),
        None => Ok(CompareOptions::NONE),
    }
}

impl<E: RecognitionEngine> Facade for SpeechRecognizer<E> {
    const OBJECT_TYPE: &'static str = "SpeechRecognizer";
    type Method = RecognizerMethod;
    type Property = RecognizerProperty;

    fn invoke(&self, _this: &Object, method: RecognizerMethod, args: Args<'_>) -> Result<Value> {
        use RecognizerMethod::*;
        match method {
            Dispose => self.engine.dispose().map(|_| Value::Null),
            EmulateRecognize => self.emulate_recognize(args),
            EmulateRecognizeAsync => self.emulate_recognize_async(args),
            LoadGrammar => self.load_grammar(args),
            LoadGrammarAsync => self.load_grammar_async(args),
            QuerySetting => self.query_setting(args),
            Recognize => self.recognize(args),
            RecognizeAsync => self.recognize_async(args),
            RecognizeAsyncCancel => self.engine.recognize_async_cancel().map(|_| Value::Null),
            RecognizeAsyncStop => self.engine.recognize_async_stop().map(|_| Value::Null),
            RequestRecognizerUpdate => {
                self.engine.request_recognizer_update().map(|_| Value::Null)
            }
            SubscribeEvent => self.subscribe_event(args),
            UpdateSetting => self.update_setting(args),
            UnloadAllGrammars => self.engine.unload_all_grammars().map(|_| Value::Null),
            UnloadGrammar => self.unload_grammar(args),
            UnsubscribeEvent => self.unsubscribe_event(args),
        }
    }

    fn property(&self, property: RecognizerProperty) -> Result<Value> {
        use RecognizerProperty::*;
        Ok(match property {
            AudioLevel => self.engine.audio_level()?.into(),
            AudioState => self.engine.audio_state()?.into(),
            BabbleTimeout => self.engine.timeout(RecognizerTimeout::Babble)?.into(),
            EndSilenceTimeout => self.engine.timeout(RecognizerTimeout::EndSilence)?.into(),
            EndSilenceTimeoutAmbiguous => {
                self.engine.timeout(RecognizerTimeout::EndSilenceAmbiguous)?.into()
            }
            Grammars => self.engine.grammar_names()?.into_iter().map(Value::from).collect(),
            InitialSilenceTimeout => {
                self.engine.timeout(RecognizerTimeout::InitialSilence)?.into()
            }
            MaxAlternatives => self.engine.max_alternates()?.into(),
            RecognizerInfo => Record::from(&self.engine.recognizer_info()?).into(),
        })
    }

    fn set_property(&self, property: RecognizerProperty, value: Value) -> Result<()> {
        let name: &'static str = property.into();
        let values = [value];
        let args = Args::new(name, &values);
        if let Some(which) = property.timeout() {
            return self.engine.set_timeout(which, args.millis(0)?);
        }
        match property {
            RecognizerProperty::MaxAlternatives => self.engine.set_max_alternates(args.int(0)?),
            _ => Err(Error::missing_member(Self::OBJECT_TYPE, name)),
        }
    }
}

/// Lists the recognition engines installed on the system, as `RecognizerInfo` records.
pub fn installed_recognizers<E: RecognitionEngine>() -> Result<Value> {
    Ok(E::installed_recognizers()?.iter().map(|info| Value::Record(info.into())).collect())
}
