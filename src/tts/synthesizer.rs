use strum_macros::{EnumString, IntoStaticStr};

use crate::dispatch::{Args, Facade};
use crate::event::{EventKind, Subscriptions};
use crate::value::{Object, Record, Value};
use crate::{Error, Result};

use super::{
    Rate, SynthesisEngine, SynthesizerEvent, SynthesizerEventArgs, SynthesizerState, VoiceFilter,
    Volume,
};

/// The media type of W3C pronunciation lexicons.
const PLS_MEDIA_TYPE: &str = "application/pls+xml";

/// Script facade over a [`SynthesisEngine`].
pub struct SpeechSynthesizer<E: SynthesisEngine> {
    engine: E,
    events: Subscriptions<SynthesizerEventArgs>,
}

/// The operations of [`SpeechSynthesizer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
#[allow(missing_docs)]
pub enum SynthesizerMethod {
    AddLexicon,
    Cancel,
    Dispose,
    GetAllVoices,
    GetVoices,
    Pause,
    RemoveLexicon,
    Resume,
    SetVoice,
    Speak,
    SpeakAsync,
    SubscribeEvent,
    UnsubscribeEvent,
}

/// The properties of [`SpeechSynthesizer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
#[allow(missing_docs)]
pub enum SynthesizerProperty {
    Rate,
    State,
    Voice,
    Volume,
}

impl<E: SynthesisEngine> SpeechSynthesizer<E> {
    /// Wraps an existing engine.
    pub fn new(engine: E) -> Self {
        Self {
            engine,
            events: Subscriptions::new(Self::OBJECT_TYPE),
        }
    }

    /// Creates the facade with a new engine. Constructor arguments are ignored.
    pub fn create(_args: &[Value]) -> Result<Self> {
        Ok(Self::new(E::new()?))
    }

    /// Borrows the wrapped engine.
    pub fn engine(&self) -> &E {
        &self.engine
    }

    fn voices(&self, filter: &VoiceFilter) -> Result<Value> {
        Ok(self
            .engine
            .installed_voices(filter)?
            .iter()
            .filter(|voice| voice.enabled)
            .map(|voice| Value::Record((&voice.info).into()))
            .collect())
    }

    fn get_voices(&self, args: Args) -> Result<Value> {
        let filter = match args.opt_string(0)? {
            Some(culture) => VoiceFilter::Culture(culture.to_string()),
            None => VoiceFilter::CurrentCulture,
        };
        self.voices(&filter)
    }

    fn speak(&self, args: Args, wait: bool) -> Result<Value> {
        let text = args.string(0)?;
        if text.trim().is_empty() {
            return Ok(false.into());
        }
        if wait {
            self.engine.speak(text)?;
        } else {
            self.engine.speak_async(text)?;
        }
        Ok(true.into())
    }

    fn pause(&self) -> Result<Value> {
        self.engine.pause()?;
        Ok((self.engine.state()? == SynthesizerState::Paused).into())
    }

    fn subscribe_event(&self, args: Args) -> Result<Value> {
        let kind = SynthesizerEvent::from_arg(Self::OBJECT_TYPE, &args, 0)?;
        let callback = args.callback(1)?;
        self.events.subscribe(&self.engine, kind, callback.clone())?;
        Ok(Value::Null)
    }

    fn unsubscribe_event(&self, args: Args) -> Result<Value> {
        let kind = SynthesizerEvent::from_arg(Self::OBJECT_TYPE, &args, 0)?;
        let callback = args.callback(1)?;
        Ok(self.events.unsubscribe(&self.engine, kind, callback)?.into())
    }
}

impl<E: SynthesisEngine> Facade for SpeechSynthesizer<E> {
    const OBJECT_TYPE: &'static str = "SpeechSynthesizer";
    type Method = SynthesizerMethod;
    type Property = SynthesizerProperty;

    fn invoke(&self, _this: &Object, method: SynthesizerMethod, args: Args<'_>) -> Result<Value> {
        use SynthesizerMethod::*;
        let done = |_| Value::Null;
        match method {
            AddLexicon => self.engine.add_lexicon(args.string(0)?, PLS_MEDIA_TYPE).map(done),
            Cancel => self.engine.cancel_all().map(done),
            Dispose => self.engine.dispose().map(done),
            GetAllVoices => self.voices(&VoiceFilter::All),
            GetVoices => self.get_voices(args),
            Pause => self.pause(),
            RemoveLexicon => self.engine.remove_lexicon(args.string(0)?).map(done),
            Resume => self.engine.resume().map(done),
            SetVoice => self.engine.select_voice(args.string(0)?).map(done),
            Speak => self.speak(args, true),
            SpeakAsync => self.speak(args, false),
            SubscribeEvent => self.subscribe_event(args),
            UnsubscribeEvent => self.unsubscribe_event(args),
        }
    }

    fn property(&self, property: SynthesizerProperty) -> Result<Value> {
        Ok(match property {
            SynthesizerProperty::Rate => self.engine.rate()?.into(),
            SynthesizerProperty::State => self.engine.state()?.into(),
            SynthesizerProperty::Voice => self.engine.voice()?.as_ref().map(Record::from).into(),
            SynthesizerProperty::Volume => self.engine.volume()?.into(),
        })
    }

    fn set_property(&self, property: SynthesizerProperty, value: Value) -> Result<()> {
        let name: &'static str = property.into();
        let values = [value];
        let args = Args::new(name, &values);
        match property {
            SynthesizerProperty::Rate => self.engine.set_rate(Rate::new(args.int(0)?)),
            SynthesizerProperty::Voice => self.engine.select_voice(args.string(0)?),
            SynthesizerProperty::Volume => self.engine.set_volume(Volume::new(args.int(0)?)),
            SynthesizerProperty::State => Err(Error::missing_member(Self::OBJECT_TYPE, name)),
        }
    }
}
