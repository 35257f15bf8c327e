/// Asks the user a yes/no question and blocks until they answer.
pub trait Confirm {
  fn confirm(&self, prompt: &str) -> bool;
}

impl<F> Confirm for F
where
  F: Fn(&str) -> bool
{
  fn confirm(&self, prompt: &str) -> bool {
    self(prompt)
  }
}
