//! Line-oriented terminal front end for the registration form.

use std::io;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info, instrument, warn};

use crate::clients::CatalogClient;
use crate::domain::Field;
use crate::form::RegistrationForm;

pub const TITLE: &str = "Cadastro de Produtos";
pub const CONTINUE_PROMPT: &str = "Deseja cadastrar outro produto? (s/n)";

/// Counts for one console session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub saved: usize,
    pub failed: usize,
}

/// Prompts for the seven fields, submits, and shows the resulting dialog.
///
/// A session ends when the user declines to register another product or when
/// the input runs out.
pub struct Console<R, W> {
    input: R,
    output: W,
    client: CatalogClient,
    form: RegistrationForm,
}

impl<R, W> Console<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(input: R, output: W, client: CatalogClient) -> Self {
        Self {
            input,
            output,
            client,
            form: RegistrationForm::new(),
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    #[instrument(name = "console", skip(self))]
    pub async fn run(&mut self) -> io::Result<SessionSummary> {
        let mut summary = SessionSummary::default();
        self.write_line(TITLE).await?;

        loop {
            if !self.fill_form().await? {
                debug!("Input closed while filling the form");
                break;
            }

            let notice = self.form.submit(&self.client).await;
            self.write_line(&notice.to_string()).await?;

            if !notice.is_success() {
                summary.failed += 1;
                continue;
            }
            summary.saved += 1;

            match self.ask(CONTINUE_PROMPT).await? {
                Some(answer) if wants_to_stop(&answer) => break,
                Some(_) => {}
                None => break,
            }
        }

        self.output.flush().await?;
        info!(saved = summary.saved, failed = summary.failed, "Console session ended");
        Ok(summary)
    }

    /// Returns `false` if the input ended before every field was answered.
    async fn fill_form(&mut self) -> io::Result<bool> {
        for field in Field::ALL {
            match self.ask(field.label()).await? {
                Some(value) => {
                    self.form.set_field(field, value);
                }
                None => return Ok(false),
            }
        }
        Ok(true)
    }

    async fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.output.write_all(prompt.as_bytes()).await?;
        self.output.write_all(b" ").await?;
        self.output.flush().await?;

        // Raw bytes: invalid UTF-8 becomes U+FFFD instead of ending the session.
        let mut raw = Vec::new();
        if self.input.read_until(b'\n', &mut raw).await? == 0 {
            return Ok(None);
        }
        if raw.last() == Some(&b'\n') {
            raw.pop();
            if raw.last() == Some(&b'\r') {
                raw.pop();
            }
        }
        Ok(Some(decode_answer(raw)))
    }

    async fn write_line(&mut self, text: &str) -> io::Result<()> {
        self.output.write_all(text.as_bytes()).await?;
        self.output.write_all(b"\n").await
    }
}

fn decode_answer(raw: Vec<u8>) -> String {
    String::from_utf8(raw).unwrap_or_else(|e| {
        warn!("Input line was not valid UTF-8; replacing invalid bytes");
        String::from_utf8_lossy(e.as_bytes()).into_owned()
    })
}

fn wants_to_stop(answer: &str) -> bool {
    matches!(
        answer.trim().to_lowercase().as_str(),
        "n" | "nao" | "não" | "no"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog_actor::CatalogError;
    use crate::mock_framework::{answer_saves, create_mock_client};
    use crate::store::StoreError;
    use tokio::io::BufReader;

    async fn run_session(
        input: &str,
        reply: impl Fn(&crate::domain::Product) -> Result<(), CatalogError> + Send + 'static,
    ) -> (SessionSummary, String, Vec<crate::domain::Product>) {
        let (client, receiver) = create_mock_client(4);
        let worker = tokio::spawn(answer_saves(receiver, reply));

        let mut console = Console::new(BufReader::new(input.as_bytes()), Vec::new(), client);
        let summary = console.run().await.unwrap();
        let output = String::from_utf8(console.into_output()).unwrap();

        let products = worker.await.unwrap();
        (summary, output, products)
    }

    #[test]
    fn test_stop_answers() {
        for answer in ["n", "N", " não ", "nao", "no"] {
            assert!(wants_to_stop(answer), "{answer}");
        }
        for answer in ["s", "sim", "", "y"] {
            assert!(!wants_to_stop(answer), "{answer}");
        }
    }

    #[tokio::test]
    async fn test_single_save_then_quit() {
        let input = "123\nSoap\nHygiene\n2.50\n10\nAcme\nbar soap\nn\n";

        let (summary, output, products) = run_session(input, |_| Ok(())).await;

        assert_eq!(summary, SessionSummary { saved: 1, failed: 0 });
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].to_string(), "123,Soap,Hygiene,2.5,10,Acme,bar soap");
        assert!(output.starts_with(TITLE));
        assert!(output.contains("Código de Barras:"));
        assert!(output.contains("[Sucesso] Produto salvo com sucesso!"));
        assert!(output.contains(CONTINUE_PROMPT));
    }

    #[tokio::test]
    async fn test_format_error_reprompts_and_keeps_going() {
        let input = concat!(
            "1\nA\nT\ntwo-fifty\n1\nF\nD\n",
            "1\nA\nT\n2\n1\nF\nD\n",
            "s\n",
            "2\r\nB\r\nT\r\n3.0\r\n4\r\nF\r\nD\r\n",
        );

        let (summary, output, products) = run_session(input, |_| Ok(())).await;

        assert_eq!(summary, SessionSummary { saved: 2, failed: 1 });
        assert!(output.contains("[Erro de Formato]"));
        let barcodes: Vec<&str> = products.iter().map(|p| p.barcode()).collect();
        assert_eq!(barcodes, ["1", "2"]);
        assert_eq!(products[1].description(), "D");
    }

    #[tokio::test]
    async fn test_io_error_is_reported() {
        let input = "9\nX\nY\n1\n1\nZ\nW\n";

        let (summary, output, _) = run_session(input, |_| {
            Err(CatalogError::Store(StoreError::Data {
                path: "produtos.csv".into(),
                source: io::Error::new(io::ErrorKind::Other, "disk full"),
            }))
        })
        .await;

        assert_eq!(summary, SessionSummary { saved: 0, failed: 1 });
        assert!(output.contains("[Erro de IO] Erro ao salvar o produto: "));
        assert!(output.contains("disk full"));
    }

    #[tokio::test]
    async fn test_invalid_utf8_does_not_end_session() {
        let (client, receiver) = create_mock_client(4);
        let worker = tokio::spawn(answer_saves(receiver, |_| Ok(())));

        let input: &[u8] = b"1\nA\xff\nT\n1\n1\nF\nD\ns\n2\nB\nT\n2\n2\nF\nD\nn\n";
        let mut console = Console::new(BufReader::new(input), Vec::new(), client);
        let summary = console.run().await.unwrap();
        drop(console);

        let products = worker.await.unwrap();
        assert_eq!(summary, SessionSummary { saved: 2, failed: 0 });
        assert_eq!(products[0].name(), "A\u{FFFD}");
        assert_eq!(products[1].barcode(), "2");
    }

    #[tokio::test]
    async fn test_partial_form_at_end_of_input_saves_nothing() {
        let (summary, _, products) = run_session("1\nA\n", |_| Ok(())).await;

        assert_eq!(summary, SessionSummary::default());
        assert!(products.is_empty());
    }
}
