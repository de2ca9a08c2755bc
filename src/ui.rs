use indicatif::{ProgressBar, ProgressStyle};

pub fn single_pb(length: u64) -> ProgressBar {
    let pb = ProgressBar::new(length);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] [ {bar:50} ] {pos}/{len} {msg} {spinner}")
            .unwrap()
            .progress_chars("#|-"),
    );
    pb
}
