mod common;

use std::sync::Arc;

use common::{recorder, LoopbackRecognizer};
use speech_script::stt::{
    installed_recognizers, Grammar, GrammarBuilder, RecognitionEngine, RecognizerEvent,
    RecognizerEventArgs, SpeechRecognizer,
};
use speech_script::value::{Callback, Object, Value};
use speech_script::Error;

fn recognizer() -> Object {
    Object::new(SpeechRecognizer::<LoopbackRecognizer>::create(&[]).unwrap())
}

fn engine(object: &Object) -> &LoopbackRecognizer {
    object.downcast_ref::<SpeechRecognizer<LoopbackRecognizer>>().unwrap().engine()
}

fn colors_grammar() -> Object {
    let builder = Object::new(GrammarBuilder::new(Some("en-US")));
    builder
        .call("append_phrase", &["paint it".into()])
        .unwrap()
        .as_object()
        .unwrap()
        .call("append_choices", &["red".into(), "black".into()])
        .unwrap();
    Object::new(Grammar::create(&[builder.into(), "colors".into()]).unwrap())
}

#[test]
fn subscribe_then_unsubscribe_by_name() {
    let recognizer = recognizer();
    let (callback, calls) = recorder();

    recognizer.call("subscribe_event", &["SpeechRecognized".into(), callback.clone().into()]).unwrap();
    recognizer.call("load_grammar", &[colors_grammar().into()]).unwrap();
    let result = recognizer.call("emulate_recognize", &["paint it black".into()]).unwrap();
    assert_eq!(Value::from("paint it black"), result.as_record().unwrap()["text"]);

    {
        let calls = calls.lock().unwrap();
        assert_eq!(1, calls.len());
        let record = calls[0][0].as_record().unwrap();
        assert_eq!("SpeechRecognized", record.type_name());
        let result = record["result"].as_record().unwrap();
        assert_eq!(Value::from("colors"), result["grammar"]);
    }

    let removed = recognizer
        .call("unsubscribe_event", &["SpeechRecognized".into(), callback.clone().into()])
        .unwrap();
    assert_eq!(Value::Bool(true), removed);
    assert_eq!(0, engine(&recognizer).handler_count(RecognizerEvent::SpeechRecognized));

    recognizer.call("emulate_recognize", &["paint it red".into()]).unwrap();
    assert_eq!(1, calls.lock().unwrap().len());

    let removed = recognizer
        .call("unsubscribe_event", &["SpeechRecognized".into(), callback.into()])
        .unwrap();
    assert_eq!(Value::Bool(false), removed);
}

#[test]
fn unknown_callback_unsubscribes_nothing() {
    let recognizer = recognizer();
    let (subscribed, _) = recorder();
    let (stranger, _) = recorder();
    let kind = Value::from(RecognizerEvent::SpeechDetected as u32);

    recognizer.call("subscribe_event", &[kind.clone(), subscribed.into()]).unwrap();
    let removed = recognizer.call("unsubscribe_event", &[kind, stranger.into()]).unwrap();
    assert_eq!(Value::Bool(false), removed);
    assert_eq!(1, engine(&recognizer).handler_count(RecognizerEvent::SpeechDetected));
}

#[test]
fn same_callback_twice_needs_two_unsubscribes() {
    let recognizer = recognizer();
    let (callback, calls) = recorder();
    let args: [Value; 2] = ["SpeechDetected".into(), callback.into()];

    recognizer.call("subscribe_event", &args).unwrap();
    recognizer.call("subscribe_event", &args).unwrap();
    engine(&recognizer).emit(RecognizerEventArgs::SpeechDetected);
    assert_eq!(2, calls.lock().unwrap().len());

    assert_eq!(Value::Bool(true), recognizer.call("unsubscribe_event", &args).unwrap());
    assert_eq!(1, engine(&recognizer).handler_count(RecognizerEvent::SpeechDetected));
    assert_eq!(Value::Bool(true), recognizer.call("unsubscribe_event", &args).unwrap());
    assert_eq!(Value::Bool(false), recognizer.call("unsubscribe_event", &args).unwrap());
}

#[test]
fn failed_detach_keeps_subscription() {
    let recognizer = recognizer();
    let (callback, _) = recorder();
    let args: [Value; 2] = ["AudioLevelUpdated".into(), callback.into()];

    recognizer.call("subscribe_event", &args).unwrap();
    engine(&recognizer).set_fail_detach(true);
    assert!(matches!(recognizer.call("unsubscribe_event", &args), Err(Error::Engine(_))));

    engine(&recognizer).set_fail_detach(false);
    assert_eq!(Value::Bool(true), recognizer.call("unsubscribe_event", &args).unwrap());
    assert_eq!(0, engine(&recognizer).handler_count(RecognizerEvent::AudioLevelUpdated));
}

#[test]
fn callback_may_unsubscribe_itself() {
    let recognizer = recognizer();
    let slot = Arc::new(std::sync::Mutex::new(None::<Callback>));
    let callback = {
        let slot = slot.clone();
        let target = recognizer.clone();
        Callback::new(move |_| {
            if let Some(me) = slot.lock().unwrap().take() {
                target.call("unsubscribe_event", &["RecognizerUpdateReached".into(), me.into()])?;
            }
            Ok(Value::Null)
        })
    };
    *slot.lock().unwrap() = Some(callback.clone());

    recognizer.call("subscribe_event", &["RecognizerUpdateReached".into(), callback.into()]).unwrap();
    recognizer.call("request_recognizer_update", &[]).unwrap();
    assert_eq!(0, engine(&recognizer).handler_count(RecognizerEvent::RecognizerUpdateReached));
}

#[test]
fn undefined_events_and_members_fail() {
    let recognizer = recognizer();
    let (callback, _) = recorder();
    assert!(matches!(
        recognizer.call("subscribe_event", &["SpeakStarted".into(), callback.clone().into()]),
        Err(Error::UndefinedEvent {
            object_type: "SpeechRecognizer",
            ..
        })
    ));
    assert!(matches!(
        recognizer.call("unsubscribe_event", &[42.0.into(), callback.into()]),
        Err(Error::UndefinedEvent { .. })
    ));
    assert!(matches!(recognizer.call("listen", &[]), Err(Error::MissingMember { .. })));
    assert!(matches!(recognizer.get("volume"), Err(Error::MissingMember { .. })));
    assert!(matches!(recognizer.set("audio_level", 3.0), Err(Error::MissingMember { .. })));
}

#[test]
fn grammars_load_and_unload() {
    let recognizer = recognizer();
    let grammar = colors_grammar();

    recognizer.call("load_grammar_async", &[grammar.clone().into()]).unwrap();
    assert_eq!(Value::Bool(true), grammar.get("loaded").unwrap());
    assert_eq!(Value::from(vec![Value::from("colors")]), recognizer.get("grammars").unwrap());

    let rejected = recognizer.call("emulate_recognize", &["paint it blue".into()]).unwrap();
    assert_eq!(Value::Null, rejected);

    assert_eq!(Value::Bool(true), recognizer.call("unload_grammar", &[grammar.clone().into()]).unwrap());
    assert_eq!(Value::Bool(false), grammar.get("loaded").unwrap());
    assert!(matches!(
        recognizer.call("load_grammar", &["colors".into()]),
        Err(Error::InvalidArgument {
            expected: "Grammar",
            ..
        })
    ));
}

#[test]
fn properties_round_trip_through_scripts() {
    let recognizer = recognizer();

    recognizer.set("babble_timeout", 1500.0).unwrap();
    assert_eq!(Value::Number(1500.0), recognizer.get("babble_timeout").unwrap());
    assert_eq!(Value::Number(0.0), recognizer.get("end_silence_timeout").unwrap());
    assert!(matches!(
        recognizer.set("initial_silence_timeout", -1.0),
        Err(Error::InvalidArgument { .. })
    ));

    recognizer.set("max_alternatives", 3.0).unwrap();
    assert_eq!(Value::Number(3.0), recognizer.get("max_alternatives").unwrap());

    let info = recognizer.get("recognizer_info").unwrap();
    assert_eq!(Value::from("Loopback Recognizer"), info.as_record().unwrap()["name"]);
    assert_eq!(Value::Number(0.0), recognizer.get("audio_state").unwrap());
}

#[test]
fn settings_report_failure_as_false() {
    let recognizer = recognizer();
    assert_eq!(
        Value::Bool(true),
        recognizer.call("update_setting", &["ResourceUsage".into(), 50.0.into()]).unwrap()
    );
    assert_eq!(
        Value::Number(50.0),
        recognizer.call("query_setting", &["ResourceUsage".into()]).unwrap()
    );
    assert_eq!(
        Value::Bool(false),
        recognizer.call("update_setting", &["".into(), 1.0.into()]).unwrap()
    );
    assert_eq!(Value::Null, recognizer.call("query_setting", &["Missing".into()]).unwrap());
}

#[test]
fn background_recognition_can_be_cancelled() {
    let recognizer = recognizer();
    let (callback, calls) = recorder();
    recognizer.call("subscribe_event", &["RecognizeCompleted".into(), callback.into()]).unwrap();

    recognizer.call("recognize_async", &[1.0.into()]).unwrap();
    assert!(engine(&recognizer).is_listening());
    recognizer.call("recognize_async_cancel", &[]).unwrap();
    assert!(!engine(&recognizer).is_listening());

    let calls = calls.lock().unwrap();
    let record = calls[0][0].as_record().unwrap();
    assert_eq!(Value::Bool(true), record["cancelled"]);
    assert_eq!(Value::from(""), record["error"]);
}

#[test]
fn methods_read_as_bound_callbacks() {
    let recognizer = recognizer();
    let dispose = recognizer.get("dispose").unwrap();
    dispose.as_callback().unwrap().invoke(&[]).unwrap();
    assert!(engine(&recognizer).is_disposed());
}

#[test]
fn lists_installed_recognizers() {
    let recognizers = installed_recognizers::<LoopbackRecognizer>().unwrap();
    let list = recognizers.as_array().unwrap();
    assert_eq!(1, list.len());
    assert_eq!(Value::from("loopback"), list[0].as_record().unwrap()["id"]);
    assert_eq!(1, LoopbackRecognizer::installed_recognizers().unwrap().len());
}
