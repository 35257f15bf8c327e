use chrono::Utc;

/// Hands out task ids. Every id returned by one source is distinct.
pub trait IdSource {
  fn next_id(&mut self) -> String;

  /// Called with every id loaded from storage.
  fn observe(&mut self, _id: &str) {}
}

/// Millisecond-timestamp ids. When the clock has not moved past the last
/// id handed out, the previous value is bumped by one instead. Once that
/// would pass `i64::MAX`, ids become `<i64::MAX>-<n>` with a counter.
pub struct ClockIds {
  clock:    Box<dyn FnMut() -> i64>,
  last:     Option<i64>,
  overflow: u64
}

impl ClockIds {
  pub fn new() -> Self {
    Self::with_clock(|| {
      Utc::now().timestamp_millis()
    })
  }

  pub fn with_clock(
    clock: impl FnMut() -> i64 + 'static
  ) -> Self {
    Self {
      clock:    Box::new(clock),
      last:     None,
      overflow: 0
    }
  }
}

impl Default for ClockIds {
  fn default() -> Self {
    Self::new()
  }
}

impl IdSource for ClockIds {
  fn next_id(&mut self) -> String {
    let now = (self.clock)();
    let next = match self.last {
      | Some(last) if now <= last => {
        last.checked_add(1)
      }
      | _ => Some(now)
    };

    match next {
      | Some(next) => {
        self.last = Some(next);
        next.to_string()
      }
      | None => {
        self.overflow += 1;
        format!("{}-{}", i64::MAX, self.overflow)
      }
    }
  }

  /// Never reissues `id` or anything below it.
  fn observe(&mut self, id: &str) {
    if let Ok(value) = id.parse::<i64>() {
      self.last = Some(
        self.last.map_or(value, |last| {
          last.max(value)
        })
      );
    }
  }
}

/// Deterministic ids for tests and demos: `prefix1`, `prefix2`, ...
#[derive(Debug, Clone)]
pub struct SequenceIds {
  prefix: String,
  next:   u64
}

impl SequenceIds {
  pub fn new(prefix: &str) -> Self {
    Self {
      prefix: prefix.to_string(),
      next:   1
    }
  }
}

impl IdSource for SequenceIds {
  fn next_id(&mut self) -> String {
    let id =
      format!("{}{}", self.prefix, self.next);
    self.next += 1;
    id
  }
}
