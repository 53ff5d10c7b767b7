use prompt_funnel::{
    ai::{ChatService, MockChatClient},
    app::{App, AppServices},
    extract,
    image::{ImageGenerationService, MockImageClient},
    models::Session,
};

#[tokio::test]
async fn test_full_funnel_with_mocks() {
    let chat = MockChatClient::new()
        .with_reply("Archetypes: A (Cinematic), B (Emotional), C (Commercial), D (Creative)".to_string())
        .with_reply("Recipes: 1, 2, 3".to_string())
        .with_reply("```markdown\nA lady eating ice cream under neon signs, 85mm, f/1.4\n```".to_string());
    let chat_probe = chat.clone();
    let image = MockImageClient::new();
    let image_probe = image.clone();

    let app = App::with_services(AppServices {
        chat: Box::new(chat),
        image: Box::new(image),
    });

    app.run("A lady is eating ice cream in night time", "C", "2")
        .await
        .unwrap();

    assert_eq!(chat_probe.get_call_count(), 3);
    assert_eq!(
        image_probe.received_prompts(),
        vec!["A lady eating ice cream under neon signs, 85mm, f/1.4"]
    );
}

#[tokio::test]
async fn test_funnel_without_final_fence_never_calls_image_service() {
    let chat = MockChatClient::new()
        .with_reply("Archetypes A-D".to_string())
        .with_reply("Recipes 1-3".to_string())
        .with_reply("Sorry, I lost track of the funnel.".to_string());
    let image = MockImageClient::new();
    let image_probe = image.clone();

    let app = App::with_services(AppServices {
        chat: Box::new(chat),
        image: Box::new(image),
    });

    app.run("an idea", "B", "1").await.unwrap();

    assert_eq!(image_probe.get_call_count(), 0);
}

#[tokio::test]
async fn test_each_turn_sees_exactly_the_prior_context() {
    let chat = MockChatClient::new();
    let mut session = Session::new();

    chat.send_message(&mut session, "idea").await.unwrap();
    chat.send_message(&mut session, "C").await.unwrap();
    chat.send_message(&mut session, "2").await.unwrap();

    // Context at turn N is the 2*(N-1) entries of turns 1..N-1.
    assert_eq!(chat.seen_context_lens(), vec![0, 2, 4]);
    assert_eq!(session.len(), 6);
}

#[tokio::test]
async fn test_extraction_scenarios_end_to_end() {
    // Scenario A: tagged fence.
    assert_eq!(
        extract::fenced_block("```markdown\nA cat on a mat\n```"),
        Some("A cat on a mat".to_string())
    );

    // Scenario B: no fence at all.
    assert_eq!(extract::fenced_block("No fences here"), None);

    // Scenario C: inline backticks survive inside a fence.
    assert_eq!(
        extract::fenced_block("```\nSome `inline` code\n```"),
        Some("Some `inline` code".to_string())
    );
}

#[tokio::test]
async fn test_image_mock_records_hand_off() {
    let image = MockImageClient::new();

    image.generate_image("prompt one").await.unwrap();
    image.generate_image("prompt two").await.unwrap();

    assert_eq!(image.get_call_count(), 2);
    assert_eq!(image.received_prompts(), vec!["prompt one", "prompt two"]);
}
