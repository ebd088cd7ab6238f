use super::*;

fn solid(width: u32, height: u32, px: [u8; 4]) -> FrameRGBA {
    FrameRGBA {
        width,
        height,
        data: px.repeat((width * height) as usize),
        premultiplied: true,
    }
}

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("loep-sink-{name}-{}", std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    dir
}

#[test]
fn last_frame_sink_keeps_only_the_newest() {
    let mut sink = LastFrameSink::new();
    sink.begin(SinkConfig {
        canvas: Canvas::default(),
        fps: Fps::new(60, 1).unwrap(),
    })
    .unwrap();
    sink.push_frame(FrameIndex(0), &solid(1, 1, [0, 0, 0, 255]))
        .unwrap();
    sink.push_frame(FrameIndex(1), &solid(1, 1, [9, 9, 9, 255]))
        .unwrap();
    sink.end().unwrap();

    let (idx, frame) = sink.into_last().unwrap();
    assert_eq!(idx, FrameIndex(1));
    assert_eq!(frame.pixel(0, 0), Some([9, 9, 9, 255]));
}

#[test]
fn png_sequence_names_frames_by_index() {
    let dir = scratch_dir("seq");
    let mut sink = PngSequenceSink::new(&dir);
    sink.begin(SinkConfig {
        canvas: Canvas {
            width: 4,
            height: 3,
        },
        fps: Fps::new(60, 1).unwrap(),
    })
    .unwrap();
    sink.push_frame(FrameIndex(0), &solid(4, 3, [10, 20, 30, 255]))
        .unwrap();
    sink.push_frame(FrameIndex(7), &solid(4, 3, [0, 0, 0, 0]))
        .unwrap();
    sink.push_frame(FrameIndex(8), &FrameRGBA::empty()).unwrap();
    sink.end().unwrap();

    assert_eq!(sink.written(), 2);
    assert!(dir.join("frame_00000.png").is_file());
    assert!(dir.join("frame_00007.png").is_file());
    assert!(!dir.join("frame_00008.png").exists());

    let img = image::open(dir.join("frame_00000.png")).unwrap().to_rgba8();
    assert_eq!(img.dimensions(), (4, 3));
    assert_eq!(img.get_pixel(2, 1).0, [10, 20, 30, 255]);
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn writing_an_empty_frame_fails() {
    let dir = scratch_dir("empty");
    let err = write_png(dir.join("x.png"), &FrameRGBA::empty()).unwrap_err();
    assert!(matches!(err, LoepError::Render(_)));
}
