use std::path::Path;
use std::time::Duration;

use anyhow::Context;
use anyhow::Result;
use log::debug;
use log::trace;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::json;
use ureq::Agent;
use ureq::AgentBuilder;
use ureq::Request;

use super::FileDirection;
use super::FileRecord;
use super::ProcessRecord;
use super::RecordService;
use super::SampleRecord;
use crate::config::RemoteConfig;
use crate::ctx;
use crate::measurement::MeasurementValue;

/// The body of a new measurement.
#[derive(Serialize)]
struct MeasurementBody<'a> {
    /// The attribute name.
    attribute: &'a str,

    /// The tagged value.
    #[serde(flatten)]
    value: &'a MeasurementValue,
}

/// A [RecordService] speaking JSON over HTTP.
#[derive(Debug)]
pub struct HttpService {
    /// The connection pool.
    agent: Agent,

    /// The api root, without a trailing `/`.
    base: String,

    /// The bearer token.
    apikey: String,

    /// The project that files are uploaded to.
    project: String,

    /// The experiment that processes are created in.
    experiment: String,
}

impl HttpService {
    /// Connect to the service described by `remote`.
    pub fn new(remote: &RemoteConfig, apikey: String) -> Self {
        HttpService {
            agent: AgentBuilder::new()
                .timeout(Duration::from_secs(remote.timeout))
                .build(),
            base: remote.url.trim_end_matches('/').to_string(),
            apikey,
            project: remote.project.clone(),
            experiment: remote.experiment.clone(),
        }
    }

    /// The path listing the processes of the experiment.
    fn experiment_processes(&self) -> String {
        format!(
            "/projects/{}/experiments/{}/processes",
            self.project, self.experiment
        )
    }

    /// Start an authenticated request.
    fn request(&self, method: &str, path: &str) -> Request {
        let url = format!("{}{path}", self.base);
        trace!("{method} {url}");

        self.agent
            .request(method, &url)
            .set("Authorization", &format!("Bearer {}", self.apikey))
    }

    /// Send a JSON body and decode the JSON answer.
    fn send<T: DeserializeOwned>(&self, method: &str, path: &str, body: impl Serialize) -> Result<T> {
        self.request(method, path)
            .send_json(body)
            .with_context(ctx!(
              "The record service rejected {method} {path}", ;
              "Check the [remote] section of your configuration and your api key",
            ))?
            .into_json()
            .with_context(ctx!(
              "Could not decode the answer to {method} {path}", ;
              "Ensure that the url points to a compatible record service",
            ))
    }

    /// Send a JSON body, ignoring the answer.
    fn send_unit(&self, method: &str, path: &str, body: impl Serialize) -> Result<()> {
        self.request(method, path)
            .send_json(body)
            .with_context(ctx!(
              "The record service rejected {method} {path}", ;
              "Check the [remote] section of your configuration and your api key",
            ))?;

        Ok(())
    }

    /// Fetch and decode a JSON resource.
    fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.request("GET", path)
            .call()
            .with_context(ctx!(
              "Could not fetch {path} from the record service", ;
              "Check the [remote] section of your configuration and your api key",
            ))?
            .into_json()
            .with_context(ctx!(
              "Could not decode the answer to GET {path}", ;
              "Ensure that the url points to a compatible record service",
            ))
    }
}

impl RecordService for HttpService {
    fn create_process(&self, template_id: &str) -> Result<ProcessRecord> {
        debug!("Creating a process from {template_id:?}");

        self.send(
            "POST",
            &self.experiment_processes(),
            json!({ "template_id": template_id }),
        )
    }

    fn rename_process(&self, process: &ProcessRecord, name: &str) -> Result<ProcessRecord> {
        self.send(
            "PUT",
            &format!("/processes/{}", process.id),
            json!({ "name": name }),
        )
    }

    fn create_samples(&self, process: &ProcessRecord, names: &[&str]) -> Result<Vec<SampleRecord>> {
        self.send(
            "POST",
            &format!("/processes/{}/samples", process.id),
            json!({ "names": names }),
        )
    }

    fn add_measurement(
        &self,
        process: &ProcessRecord,
        label: &str,
        value: &MeasurementValue,
    ) -> Result<()> {
        self.send_unit(
            "POST",
            &format!("/processes/{}/measurements", process.id),
            MeasurementBody {
                attribute: label,
                value,
            },
        )
    }

    fn upload_file(&self, local_path: &Path, contents: &[u8]) -> Result<FileRecord> {
        let name = local_path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        let path = format!("/projects/{}/files", self.project);

        debug!("Uploading {local_path:?} as {name:?}");

        self.request("POST", &path)
            .query("name", &name)
            .set("Content-Type", "application/octet-stream")
            .send_bytes(contents)
            .with_context(ctx!(
              "Could not upload {local_path:?}", ;
              "Check that you may write to project {}", self.project
            ))?
            .into_json()
            .with_context(ctx!(
              "Could not decode the answer to uploading {local_path:?}", ;
              "Ensure that the url points to a compatible record service",
            ))
    }

    fn add_files(
        &self,
        process: &ProcessRecord,
        files: &[FileRecord],
        direction: FileDirection,
    ) -> Result<()> {
        let ids: Vec<&str> = files.iter().map(|f| f.id.as_str()).collect();

        self.send_unit(
            "POST",
            &format!("/processes/{}/files", process.id),
            json!({ "file_ids": ids, "direction": direction }),
        )
    }

    fn link_files(&self, sample: &SampleRecord, files: &[FileRecord]) -> Result<()> {
        let ids: Vec<&str> = files.iter().map(|f| f.id.as_str()).collect();

        self.send_unit(
            "POST",
            &format!("/samples/{}/files", sample.id),
            json!({ "file_ids": ids }),
        )
    }

    fn add_input_samples(&self, process: &ProcessRecord, samples: &[SampleRecord]) -> Result<()> {
        let ids: Vec<&str> = samples.iter().map(|s| s.id.as_str()).collect();

        self.send_unit(
            "POST",
            &format!("/processes/{}/samples/input", process.id),
            json!({ "sample_ids": ids }),
        )
    }

    fn list_processes(&self) -> Result<Vec<ProcessRecord>> {
        self.get(&self.experiment_processes())
    }

    fn output_samples(&self, process: &ProcessRecord) -> Result<Vec<SampleRecord>> {
        self.get(&format!("/processes/{}/samples?direction=out", process.id))
    }

    fn all_samples(&self, process: &ProcessRecord) -> Result<Vec<SampleRecord>> {
        self.get(&format!("/processes/{}/samples", process.id))
    }
}
