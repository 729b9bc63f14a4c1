use generator_js::{drain_all, Coroutine, Flow};
use std::io;
use std::sync::Arc;
use std::sync::Mutex;
use tracing_subscriber::fmt::MakeWriter;

#[derive(Clone, Default)]
struct SharedWriter {
  buffer: Arc<Mutex<Vec<u8>>>,
}

impl SharedWriter {
  fn contents(&self) -> String {
    String::from_utf8_lossy(&self.buffer.lock().unwrap()).into_owned()
  }
}

impl io::Write for SharedWriter {
  fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
    self.buffer.lock().unwrap().extend_from_slice(buf);
    Ok(buf.len())
  }

  fn flush(&mut self) -> io::Result<()> {
    Ok(())
  }
}

impl<'a> MakeWriter<'a> for SharedWriter {
  type Writer = SharedWriter;

  fn make_writer(&'a self) -> SharedWriter {
    self.clone()
  }
}

#[test]
fn engine_emits_resume_yield_and_completion_events() {
  let writer = SharedWriter::default();
  let subscriber = tracing_subscriber::fmt()
    .with_max_level(tracing::Level::TRACE)
    .with_ansi(false)
    .with_writer(writer.clone())
    .finish();

  tracing::subscriber::with_default(subscriber, || {
    let mut n = 0;
    let mut coro = Coroutine::from_fn(move |_: Option<()>| {
      n += 1;
      if n <= 2 {
        Ok(Flow::Yield(n))
      } else {
        Ok(Flow::Return)
      }
    });
    assert_eq!(drain_all(&mut coro).unwrap(), vec![1, 2]);
  });

  let output = writer.contents();
  assert!(output.contains("resume"), "missing resume event: {output}");
  assert!(output.contains("suspended at yield"), "missing yield event: {output}");
  assert!(output.contains("completed"), "missing completion event: {output}");
}
