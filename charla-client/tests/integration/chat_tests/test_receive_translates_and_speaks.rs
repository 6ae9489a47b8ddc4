use crate::utils::{RecordingSynthesizer, StaticTranslator};
use charla_client::{ChatChannel, Speaker};
use charla_core::LanguagePair;
use std::sync::Arc;
use tokio::sync::mpsc;

#[tokio::test]
async fn received_text_is_spoken_in_the_target_language() {
    let (tx, _rx) = mpsc::unbounded_channel();
    let translator = StaticTranslator::new("hello");
    let speech = RecordingSynthesizer::new();
    let mut chat = ChatChannel::new(
        tx,
        Arc::new(translator.clone()),
        Arc::new(speech.clone()),
        LanguagePair::new("es", "en"),
    );

    chat.on_receive("hola".into()).await;

    // the transcript keeps the original, the voice gets the translation
    assert_eq!(chat.transcript()[0].speaker, Speaker::Peer);
    assert_eq!(chat.transcript()[0].text, "hola");
    assert_eq!(speech.spoken().await, vec![("hello".into(), "en".into())]);
    assert_eq!(translator.calls(), 1);
}

#[tokio::test]
async fn identical_languages_skip_the_translator() {
    let (tx, _rx) = mpsc::unbounded_channel();
    let translator = StaticTranslator::new("should never appear");
    let speech = RecordingSynthesizer::new();
    let mut chat = ChatChannel::new(
        tx,
        Arc::new(translator.clone()),
        Arc::new(speech.clone()),
        LanguagePair::new("es", "es"),
    );

    chat.on_receive("hola".into()).await;

    assert_eq!(speech.spoken().await, vec![("hola".into(), "es".into())]);
    assert_eq!(translator.calls(), 0);
}
