/// Destination of the plugin output.
pub trait Printer {
    fn print(&self, output: &str);
    fn println(&self, output: &str);
}
