use async_trait::async_trait;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Lines, Stdin};
use tokio::sync::Mutex;
use voice_command_service::{AcquisitionMode, TranscriptSource, VoiceError, VoiceResult};

/// Live capture from a line-oriented reader; one line is one utterance.
///
/// End of input is a capture failure, which makes the session fall back
/// to simulation.
pub struct StdinTranscriptSource<R = BufReader<Stdin>> {
    lines: Mutex<Lines<R>>,
}

impl StdinTranscriptSource {
    pub fn new() -> Self {
        Self::from_reader(BufReader::new(tokio::io::stdin()))
    }
}

impl Default for StdinTranscriptSource {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> StdinTranscriptSource<R>
where
    R: AsyncBufRead + Unpin + Send,
{
    pub fn from_reader(reader: R) -> Self {
        Self {
            lines: Mutex::new(reader.lines()),
        }
    }
}

#[async_trait]
impl<R> TranscriptSource for StdinTranscriptSource<R>
where
    R: AsyncBufRead + Unpin + Send,
{
    fn name(&self) -> &str {
        "stdin"
    }

    async fn capture(&self) -> VoiceResult<String> {
        let mut lines = self.lines.lock().await;
        match lines.next_line().await {
            Ok(Some(line)) => Ok(line.trim().to_string()),
            Ok(None) => Err(VoiceError::acquisition(AcquisitionMode::Live, "end of input")),
            Err(e) => Err(VoiceError::acquisition(AcquisitionMode::Live, e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_reads_one_line_per_capture() {
        let source = StdinTranscriptSource::from_reader(&b"  check vitals \nhelp\n"[..]);

        assert_eq!(source.capture().await.unwrap(), "check vitals");
        assert_eq!(source.capture().await.unwrap(), "help");
    }

    #[tokio::test]
    async fn test_end_of_input_is_live_failure() {
        let source = StdinTranscriptSource::from_reader(&b""[..]);

        let err = source.capture().await.unwrap_err();
        assert!(matches!(err, VoiceError::Acquisition { mode: AcquisitionMode::Live, .. }));
    }
}
