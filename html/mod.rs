//! Markup for elements created at runtime. Text goes through [`escape_to_string`],
//! [`PreEscaped`] marks markup that is already safe.

mod escape;
pub use escape::escape_to_string;

/// Writes a value into an HTML buffer
pub trait Render {
    /// Appends the escaped representation of `self` to `buffer`
    fn render_to(&self, buffer: &mut String);

    fn render(&self) -> Markup {
        let mut buffer = String::new();
        self.render_to(&mut buffer);
        PreEscaped(buffer)
    }
}

impl Render for str {
    fn render_to(&self, buffer: &mut String) {
        escape_to_string(self, buffer);
    }
}

impl Render for String {
    fn render_to(&self, buffer: &mut String) {
        escape_to_string(self, buffer);
    }
}

impl Render for u32 {
    fn render_to(&self, buffer: &mut String) {
        buffer.push_str(itoa::Buffer::new().format(*self));
    }
}

/// Markup written to the buffer as is
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreEscaped<T>(pub T);

/// Rendered HTML
pub type Markup = PreEscaped<String>;

impl<T: AsRef<str>> Render for PreEscaped<T> {
    fn render_to(&self, buffer: &mut String) {
        buffer.push_str(self.0.as_ref());
    }
}

impl Markup {
    pub fn into_string(self) -> String {
        self.0
    }
}
