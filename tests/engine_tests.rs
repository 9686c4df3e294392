//! Integration tests for the engine boundary: cache behavior, the JSON
//! entry point, and the worker thread.

use saccade::{
    segment_text_by_sentence, Engine, EngineConfig, EngineHandle, Granularity, Request, RequestOp,
    Response, ResponseBody,
};

fn analyze(id: u64, doc_id: u64, text: &str, granularity: Granularity) -> Request {
    Request {
        id,
        doc_id,
        op: RequestOp::Analyze {
            text: text.to_owned(),
            granularity,
        },
    }
}

fn segment(id: u64, doc_id: u64, granularity: Granularity) -> Request {
    Request {
        id,
        doc_id,
        op: RequestOp::Segment { granularity },
    }
}

fn find(id: u64, doc_id: u64, query: &str) -> Request {
    Request {
        id,
        doc_id,
        op: RequestOp::Find {
            query: query.to_owned(),
        },
    }
}

fn segments_of(response: Response) -> Vec<saccade::Segment> {
    match response.body {
        ResponseBody::Analyze { segments, .. } | ResponseBody::Segment { segments } => segments,
        ResponseBody::Find { .. } => panic!("expected a segment-bearing response"),
    }
}

// =============================================================================
// Cache Behavior
// =============================================================================

#[test]
fn segment_after_analyze_reuses_cached_tokens() {
    let mut engine = Engine::new();
    let analyzed = segments_of(engine.handle(analyze(1, 1, "one two three four", Granularity::Bigram)));
    let segmented = segments_of(engine.handle(segment(2, 1, Granularity::Bigram)));

    assert_eq!(analyzed, segmented);
}

#[test]
fn reanalyze_replaces_the_entry() {
    let mut engine = Engine::new();
    engine.handle(analyze(1, 1, "old text here", Granularity::Word));
    engine.handle(analyze(2, 1, "completely new", Granularity::Word));

    let segments = segments_of(engine.handle(segment(3, 1, Granularity::Word)));
    let texts: Vec<&str> = segments.iter().map(|s| s.text.as_str()).collect();
    assert_eq!(texts, ["completely", "new"]);
}

#[test]
fn reanalyze_same_text_is_stable() {
    let mut engine = Engine::new();
    let first = engine.handle(analyze(1, 1, "same text twice.", Granularity::Sentence));
    let second = engine.handle(analyze(2, 1, "same text twice.", Granularity::Sentence));

    assert_eq!(segments_of(first), segments_of(second));
}

#[test]
fn documents_do_not_share_entries() {
    let mut engine = Engine::new();
    engine.handle(analyze(1, 1, "alpha beta", Granularity::Word));
    engine.handle(analyze(2, 2, "gamma", Granularity::Word));

    assert_eq!(segments_of(engine.handle(segment(3, 1, Granularity::Word))).len(), 2);
    assert_eq!(segments_of(engine.handle(segment(4, 2, Granularity::Word))).len(), 1);
}

#[test]
fn one_analyze_serves_every_granularity() {
    let mut engine = Engine::new();
    let text = "One two three. Four five six seven! Eight";
    engine.handle(analyze(1, 1, text, Granularity::Word));

    let token_count = 8;
    let words = segments_of(engine.handle(segment(2, 1, Granularity::Word)));
    assert_eq!(words.len(), token_count);

    let bigrams = segments_of(engine.handle(segment(3, 1, Granularity::Bigram)));
    assert_eq!(bigrams.len(), 4);

    let trigrams = segments_of(engine.handle(segment(4, 1, Granularity::Trigram)));
    assert_eq!(trigrams.len(), 3);

    let sentences = segments_of(engine.handle(segment(5, 1, Granularity::Sentence)));
    assert_eq!(sentences.len(), 3);

    let tweets = segments_of(engine.handle(segment(6, 1, Granularity::Tweet)));
    assert_eq!(tweets.len(), 1);
    assert_eq!(tweets[0].word_count, token_count);
}

#[test]
fn sentence_granularity_uses_text_level_boundaries() {
    // the token path would merge "(done." with ")" and split differently;
    // the engine answers from the stored text
    let text = "it is (done. ) fine";
    let mut engine = Engine::new();
    let via_engine = segments_of(engine.handle(analyze(1, 1, text, Granularity::Sentence)));

    assert_eq!(via_engine, segment_text_by_sentence(text));
}

// =============================================================================
// JSON Entry Point
// =============================================================================

#[test]
fn json_analyze_round_trip() {
    let mut engine = Engine::new();
    let response = engine
        .handle_json(
            r#"{"id": 5, "kind": "analyze", "docId": 9,
                "text": "Focus on reading speed", "granularity": "word"}"#,
        )
        .expect("well-formed request deserves a response");

    let value: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(value["id"], 5);
    assert_eq!(value["docId"], 9);
    assert_eq!(value["kind"], "analyze-result");
    assert_eq!(value["tokens"][2], "reading");
    assert_eq!(value["segments"][2]["startIndex"], 2);
    assert_eq!(value["segments"][2]["wordCount"], 1);
}

#[test]
fn json_find_reports_matches() {
    let mut engine = Engine::new();
    engine
        .handle_json(
            r#"{"id": 1, "kind": "analyze", "docId": 3,
                "text": "Focus on reading speed", "granularity": "word"}"#,
        )
        .unwrap();

    let response = engine
        .handle_json(r#"{"id": 2, "kind": "find", "docId": 3, "query": "read"}"#)
        .unwrap();

    let value: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(value["kind"], "find-result");
    assert_eq!(value["query"], "read");
    assert_eq!(value["matches"], serde_json::json!([2]));
}

#[test]
fn malformed_payloads_are_dropped_silently() {
    let mut engine = Engine::new();

    // not JSON at all
    assert!(engine.handle_json("..not json..").is_none());
    // JSON but not an object
    assert!(engine.handle_json("[1, 2, 3]").is_none());
    // unknown discriminant
    assert!(engine
        .handle_json(r#"{"id": 1, "kind": "defragment", "docId": 1}"#)
        .is_none());
    // missing payload field
    assert!(engine
        .handle_json(r#"{"id": 1, "kind": "find", "docId": 1}"#)
        .is_none());
    // wrong payload type
    assert!(engine
        .handle_json(r#"{"id": 1, "kind": "find", "docId": 1, "query": 7}"#)
        .is_none());

    // the engine is still healthy afterwards
    assert!(engine
        .handle_json(r#"{"id": 2, "kind": "segment", "docId": 1, "granularity": "word"}"#)
        .is_some());
}

#[test]
fn unknown_document_degrades_to_empty_output() {
    let mut engine = Engine::new();

    let response = engine
        .handle_json(r#"{"id": 1, "kind": "segment", "docId": 404, "granularity": "tweet"}"#)
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(value["segments"], serde_json::json!([]));

    let response = engine
        .handle_json(r#"{"id": 2, "kind": "find", "docId": 404, "query": "ghost"}"#)
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(value["matches"], serde_json::json!([]));
}

// =============================================================================
// Worker Thread
// =============================================================================

#[test]
fn worker_answers_in_request_order() {
    let handle = EngineHandle::spawn(EngineConfig::default());

    handle.send(analyze(10, 1, "First doc. Second thought!", Granularity::Sentence)).unwrap();
    handle.send(segment(11, 1, Granularity::Word)).unwrap();
    handle.send(find(12, 1, "thought")).unwrap();

    let first = handle.recv().unwrap();
    let second = handle.recv().unwrap();
    let third = handle.recv().unwrap();

    assert_eq!(first.id, 10);
    assert_eq!(second.id, 11);
    assert_eq!(third.id, 12);
    assert_eq!(
        third.body,
        ResponseBody::Find {
            query: "thought".to_owned(),
            matches: vec![3],
        }
    );

    handle.shutdown().unwrap();
}

#[test]
fn worker_keeps_cache_across_requests() {
    let handle = EngineHandle::spawn(EngineConfig { tweet_max_chars: 30 });

    handle.send(analyze(1, 7, "Short one. Another short one. A third.", Granularity::Word)).unwrap();
    handle.send(segment(2, 7, Granularity::Tweet)).unwrap();

    let _ = handle.recv().unwrap();
    let tweets = segments_of(handle.recv().unwrap());

    assert_eq!(tweets.len(), 2);
    assert_eq!(tweets[0].text, "Short one. Another short one.");
    assert_eq!(tweets[1].text, "A third.");

    handle.shutdown().unwrap();
}

#[test]
fn try_recv_reports_empty_before_work_arrives() {
    let handle = EngineHandle::spawn(EngineConfig::default());

    assert!(handle.try_recv().unwrap().is_none());

    handle.send(segment(1, 1, Granularity::Word)).unwrap();
    let response = handle.recv().unwrap();
    assert_eq!(response.id, 1);

    handle.shutdown().unwrap();
}

#[test]
fn shutdown_drains_cleanly() {
    let handle = EngineHandle::spawn(EngineConfig::default());
    for id in 0..32 {
        handle.send(analyze(id, id, "a few words here.", Granularity::Word)).unwrap();
    }
    for id in 0..32 {
        assert_eq!(handle.recv().unwrap().id, id);
    }
    handle.shutdown().unwrap();
}
