// End-to-end: drive the compiled binary and inspect what lands on disk.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

fn scratch_dir(label: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("vocab-icons-{}-{}", label, std::process::id()));
    // Stale leftovers from an aborted run would break the assertions
    let _ = fs::remove_dir_all(&dir);
    dir
}

fn run_generator(out_dir: &Path) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_vocab-icons"))
        .arg("--out-dir")
        .arg(out_dir)
        .output()
        .expect("failed to launch the generator binary")
}

#[test]
fn test_generator_writes_three_valid_icons() {
    let out_dir = scratch_dir("writes");
    let output = run_generator(&out_dir);
    assert!(output.status.success(), "generator exited with failure");

    for size in [16u32, 48, 128] {
        let path = out_dir.join(format!("icon{}.png", size));
        assert!(path.exists(), "missing {}", path.display());

        let bytes = fs::read(&path).unwrap();
        let decoded = image::load_from_memory(&bytes)
            .unwrap_or_else(|e| panic!("icon{}.png does not decode: {}", size, e));
        assert_eq!(decoded.width(), size);
        assert_eq!(decoded.height(), size);
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(
        stdout.matches("✓ Created").count(),
        3,
        "expected one confirmation line per icon"
    );
    assert!(stdout.contains("All icons generated successfully!"));

    let _ = fs::remove_dir_all(&out_dir);
}

#[test]
fn test_small_icon_center_falls_in_gradient_band() {
    let out_dir = scratch_dir("gradient");
    let output = run_generator(&out_dir);
    assert!(output.status.success());

    let bytes = fs::read(out_dir.join("icon16.png")).unwrap();
    let decoded = image::load_from_memory(&bytes).unwrap().to_rgb8();
    let [r, g, b] = decoded.get_pixel(8, 8).0;

    assert!((0x2d..=0x4f).contains(&r), "red channel {} outside gradient band", r);
    assert!((0x5f..=0x8e).contains(&g), "green channel {} outside gradient band", g);
    assert!((0xcf..=0xf7).contains(&b), "blue channel {} outside gradient band", b);

    let _ = fs::remove_dir_all(&out_dir);
}

#[test]
fn test_repeated_runs_are_byte_identical() {
    let first_dir = scratch_dir("idempotent-a");
    let second_dir = scratch_dir("idempotent-b");
    assert!(run_generator(&first_dir).status.success());
    assert!(run_generator(&second_dir).status.success());

    for size in [16, 48, 128] {
        let name = format!("icon{}.png", size);
        let first = fs::read(first_dir.join(&name)).unwrap();
        let second = fs::read(second_dir.join(&name)).unwrap();
        assert_eq!(first, second, "{} differs between runs", name);
    }

    let _ = fs::remove_dir_all(&first_dir);
    let _ = fs::remove_dir_all(&second_dir);
}
