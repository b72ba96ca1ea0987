use cui_edit::{Key, Keybindings, Modifier, TextArea, View};

/// England flag: one grapheme cluster, 28 bytes, two columns wide.
pub const FLAG: &str = "\u{1F3F4}\u{E0067}\u{E0062}\u{E0065}\u{E006E}\u{E0067}\u{E007F}";

pub const LOREM: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit.
Quisque vehicula mi at elit pellentesque, eu pulvinar ligula molestie.
In vitae orci vitae elit fermentum lobortis sed in nisi.
Nam non odio nisi.
Donec vitae elit enim.
Pellentesque faucibus dolor at metus elementum sollicitudin.
Mauris eu orci vel odio ornare feugiat eget ac nisl.
Nam at dolor erat.
Integer sit amet rutrum lectus, mollis pretium sapien.
Maecenas ligula ipsum, congue vitae rhoncus eget, volutpat at quam.
Donec ac ultricies tortor, sit amet sollicitudin urna.
Integer porta ornare diam a imperdiet.
Praesent vulputate mi turpis, in porttitor diam commodo a.
Donec ut enim ligula.

[Th\u{ef}s-is-not-\u{e0}-f\u{f4}\u{f4}tn\u{f6}te]: https://example.com/footnote

S\u{ef}gned-\u{f6}ff-by: This is not a trailer

[1]: This is a footnote

Signed-off-by: John Doe <john@doe.com>
";

/// An empty text area, wrapping at `width` columns unless `width` is 0.
pub fn text_area(width: usize) -> TextArea {
    if width == 0 {
        TextArea::new()
    } else {
        TextArea::builder().auto_wrap_width(width).build()
    }
}

pub fn editable_view(name: &str) -> View {
    let mut view = View::new(name);
    view.set_editable(true);
    view
}

/// Host state that records which handlers ran.
#[derive(Debug, Default)]
pub struct Recorder {
    pub calls: Vec<String>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Binds a handler that records `label` when it runs.
pub fn bind_recording(
    bindings: &mut Keybindings<Recorder>,
    view_name: &str,
    key: Key,
    modifier: Modifier,
    label: &str,
) {
    let label = label.to_string();
    bindings.bind(view_name, key, modifier, move |recorder: &mut Recorder, _| {
        recorder.calls.push(label.clone());
        Ok(())
    });
}
