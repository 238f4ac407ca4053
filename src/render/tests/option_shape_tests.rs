//! Tests for the serialised shape of each delivery option set.
//!
//! Adapters observe option sets through their serialised keys, so these tests
//! pin exactly which descriptor fields reach each mechanism.

use crate::render::domain::{
    AllowedMentions, Attachment, Control, ControlSurface, Embed, Emoji, MessageReference, OutputId,
    RenderDescriptor, StickerId,
};
use eyre::{Result, eyre};
use rstest::{fixture, rstest};
use serde::Serialize;
use std::collections::BTreeSet;
use std::time::Duration;

fn keys_of(options: &impl Serialize) -> Result<BTreeSet<String>> {
    let value = serde_json::to_value(options)?;
    let object = value
        .as_object()
        .ok_or_else(|| eyre!("options should serialise to an object"))?;
    Ok(object.keys().cloned().collect())
}

fn key_set(keys: &[&str]) -> BTreeSet<String> {
    keys.iter().map(|key| (*key).to_owned()).collect()
}

#[fixture]
fn everything() -> RenderDescriptor {
    let controls = ControlSurface::new()
        .with_control(Control::new("go", "Go"))
        .expect("empty surface accepts a control");
    RenderDescriptor::text("body")
        .with_tts(true)
        .with_embed(Embed::titled("e"))
        .with_embeds([Embed::titled("e1")])
        .with_file(Attachment::new("f.txt", b"f".to_vec()))
        .with_files([Attachment::new("g.txt", b"g".to_vec())])
        .with_stickers([StickerId(1)])
        .with_delete_after(Duration::from_secs(5))
        .with_nonce(3)
        .with_allowed_mentions(AllowedMentions::all())
        .with_reference(MessageReference::to_output(OutputId::new(2)))
        .with_mention_author(true)
        .with_controls(controls)
        .with_suppress_embeds(true)
        .with_silent(true)
        .with_ephemeral(true)
        .with_emojis([Emoji::unicode("✅")])
}

#[rstest]
fn send_shape_includes_every_send_field(everything: RenderDescriptor) -> Result<()> {
    let keys = keys_of(&everything.for_send())?;

    assert_eq!(
        keys,
        key_set(&[
            "allowed_mentions",
            "content",
            "controls",
            "delete_after",
            "embed",
            "embeds",
            "file",
            "files",
            "mention_author",
            "nonce",
            "reference",
            "silent",
            "stickers",
            "suppress_embeds",
            "tts",
        ])
    );
    Ok(())
}

#[rstest]
fn edit_shape_excludes_send_only_fields(everything: RenderDescriptor) -> Result<()> {
    let keys = keys_of(&everything.for_edit())?;

    assert_eq!(
        keys,
        key_set(&[
            "allowed_mentions",
            "attachments",
            "content",
            "controls",
            "delete_after",
            "embed",
            "embeds",
            "suppress",
        ])
    );
    Ok(())
}

#[rstest]
fn interaction_send_shape_includes_ephemeral(everything: RenderDescriptor) -> Result<()> {
    let keys = keys_of(&everything.for_interaction_send())?;

    assert_eq!(
        keys,
        key_set(&[
            "allowed_mentions",
            "content",
            "controls",
            "delete_after",
            "embed",
            "embeds",
            "ephemeral",
            "file",
            "files",
            "silent",
            "suppress_embeds",
            "tts",
        ])
    );
    Ok(())
}

#[rstest]
fn interaction_edit_shape_is_the_narrowest(everything: RenderDescriptor) -> Result<()> {
    let keys = keys_of(&everything.for_interaction_edit())?;

    assert_eq!(
        keys,
        key_set(&[
            "allowed_mentions",
            "attachments",
            "content",
            "controls",
            "delete_after",
            "embed",
            "embeds",
        ])
    );
    Ok(())
}

#[rstest]
fn absent_optionals_are_omitted() -> Result<()> {
    let descriptor = RenderDescriptor::new();

    assert_eq!(
        keys_of(&descriptor.for_send())?,
        key_set(&["silent", "suppress_embeds", "tts"])
    );
    assert_eq!(keys_of(&descriptor.for_edit())?, key_set(&["suppress"]));
    assert!(keys_of(&descriptor.for_interaction_edit())?.is_empty());
    Ok(())
}

#[rstest]
fn reactions_never_reach_any_mechanism(everything: RenderDescriptor) -> Result<()> {
    let shapes = [
        keys_of(&everything.for_send())?,
        keys_of(&everything.for_edit())?,
        keys_of(&everything.for_interaction_send())?,
        keys_of(&everything.for_interaction_edit())?,
    ];

    assert!(shapes.iter().all(|keys| !keys.contains("emojis")));
    Ok(())
}
