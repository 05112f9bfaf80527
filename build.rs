use std::cmp::Ordering;
use std::env;
use std::process::Command;

// Instruction sets a tier can be built on
#[derive(PartialEq, Eq, Debug)]
struct CpuFeature {
    name: &'static str,
    target_feature: &'static str,
    cfg_flags: &'static [&'static str],
    detected: bool,
}

impl CpuFeature {
    // Lowest number == Highest Priority
    fn priority(&self) -> usize {
        match self.name {
            "avx2" => 0,
            "ssse3" => 1,
            _ => usize::MAX,
        }
    }

    // The wide tier also compiles the narrow one so both can be cross-checked.
    fn tiers() -> Vec<CpuFeature> {
        vec![
            CpuFeature {
                name: "ssse3",
                target_feature: "ssse3",
                cfg_flags: &["sse"],
                detected: false,
            },
            CpuFeature {
                name: "avx2",
                target_feature: "avx2",
                cfg_flags: &["avx2", "sse"],
                detected: false,
            },
        ]
    }

    fn aes() -> CpuFeature {
        CpuFeature {
            name: "aes",
            target_feature: "aes",
            cfg_flags: &["aes"],
            detected: false,
        }
    }
}

impl Ord for CpuFeature {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority().cmp(&other.priority())
    }
}

impl PartialOrd for CpuFeature {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

trait CpuFeatureDetector {
    fn detect_features(&self, features: &mut [CpuFeature]);
    fn is_applicable(&self) -> bool;
}

// Features enabled through RUSTFLAGS / -C target-cpu, as seen by rustc
struct TargetFeatureDetector;
impl CpuFeatureDetector for TargetFeatureDetector {
    fn detect_features(&self, features: &mut [CpuFeature]) {
        let enabled = env::var("CARGO_CFG_TARGET_FEATURE").unwrap_or_default();
        let enabled: Vec<&str> = enabled.split(',').collect();

        for feature in features.iter_mut() {
            feature.detected |= enabled.contains(&feature.target_feature);
        }
    }

    fn is_applicable(&self) -> bool {
        true
    }
}

// Linux CPU feature detector
struct LinuxDetector;
impl CpuFeatureDetector for LinuxDetector {
    fn detect_features(&self, features: &mut [CpuFeature]) {
        if let Ok(cpuinfo) = std::fs::read_to_string("/proc/cpuinfo") {
            let flags: Vec<&str> = cpuinfo
                .lines()
                .find(|line| line.starts_with("flags"))
                .and_then(|line| line.split(':').nth(1))
                .map(|flags| flags.split_whitespace().collect())
                .unwrap_or_default();

            for feature in features.iter_mut() {
                feature.detected |= flags.contains(&feature.name);
            }
        }
    }

    fn is_applicable(&self) -> bool {
        cfg!(target_os = "linux")
    }
}

// macOS CPU feature detector
struct MacOSDetector;
impl CpuFeatureDetector for MacOSDetector {
    fn detect_features(&self, features: &mut [CpuFeature]) {
        let output = Command::new("sysctl").args(["-a"]).output();

        if let Ok(output) = output {
            let contents = String::from_utf8_lossy(&output.stdout).to_lowercase();

            for feature in features.iter_mut() {
                feature.detected |= match feature.name {
                    "avx2" => contents.contains("hw.optional.avx2_0: 1"),
                    "ssse3" => contents.contains("hw.optional.supplementalsse3: 1"),
                    "aes" => contents.contains("hw.optional.aes: 1"),
                    _ => false,
                };
            }
        }
    }

    fn is_applicable(&self) -> bool {
        cfg!(target_os = "macos")
    }
}

struct PlatformDetector;
impl PlatformDetector {
    fn cpu_features_detectors() -> Vec<Box<dyn CpuFeatureDetector>> {
        vec![Box::new(LinuxDetector), Box::new(MacOSDetector)]
    }

    fn is_x86_target() -> bool {
        matches!(
            env::var("CARGO_CFG_TARGET_ARCH").as_deref(),
            Ok("x86") | Ok("x86_64")
        )
    }

    fn detect_cpu_features(features: &mut [CpuFeature], is_native_build: bool) {
        TargetFeatureDetector.detect_features(features);

        // The host CPU only says something about the target on native builds.
        if !is_native_build {
            return;
        }

        for detector in Self::cpu_features_detectors() {
            if detector.is_applicable() {
                detector.detect_features(features);
                break;
            }
        }
    }

    // VINTRIN_TIER=avx2|sse|scalar replaces detection entirely.
    fn forced_tier(features: &mut [CpuFeature]) -> bool {
        let Ok(forced) = env::var("VINTRIN_TIER") else {
            return false;
        };

        let wanted = match forced.trim().to_ascii_lowercase().as_str() {
            "avx2" => Some("avx2"),
            "sse" | "ssse3" => Some("ssse3"),
            "scalar" | "fallback" => None,
            other => panic!("VINTRIN_TIER: unknown tier `{other}` (expected avx2, sse or scalar)"),
        };

        if wanted.is_some() && !Self::is_x86_target() {
            panic!("VINTRIN_TIER={forced} requires an x86 or x86_64 target");
        }

        for feature in features.iter_mut() {
            feature.detected = Some(feature.name) == wanted;
        }

        println!("cargo:warning=vintrin: tier forced by VINTRIN_TIER={forced}");
        true
    }

    fn apply(features: &mut [CpuFeature], aes: &CpuFeature) {
        features.sort();

        // Highest detected tier wins; nothing detected means scalar fallback.
        let cfg_flags = features
            .iter()
            .find(|cpu_feature| cpu_feature.detected)
            .map(|cpu_feature| cpu_feature.cfg_flags)
            .unwrap_or(&["fallback"]);

        println!("applying: {}", cfg_flags[0]);

        for cfg_flag in cfg_flags {
            println!("cargo:rustc-cfg={cfg_flag}");
        }

        if aes.detected {
            println!("applying: aes");
            println!("cargo:rustc-cfg=aes");
        }

        println!("cargo::rustc-check-cfg=cfg(avx2)");
        println!("cargo::rustc-check-cfg=cfg(sse)");
        println!("cargo::rustc-check-cfg=cfg(aes)");
        println!("cargo::rustc-check-cfg=cfg(fallback)");
    }
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=VINTRIN_TIER");
    println!("cargo:rerun-if-env-changed=VINTRIN_AES");

    let host = env::var("HOST").unwrap_or_default();
    let target = env::var("TARGET").unwrap_or_default();
    let is_native_build = host == target;

    let mut features = CpuFeature::tiers();
    let mut aes = [CpuFeature::aes()];

    if PlatformDetector::is_x86_target() {
        if !PlatformDetector::forced_tier(&mut features) {
            PlatformDetector::detect_cpu_features(&mut features, is_native_build);
        }

        if env::var("VINTRIN_AES").as_deref() != Ok("0") {
            PlatformDetector::detect_cpu_features(&mut aes, is_native_build);
        }
    } else {
        // Vector tiers are x86-only; anything else gets the scalar tier.
        PlatformDetector::forced_tier(&mut features);
    }

    PlatformDetector::apply(&mut features, &aes[0]);
}
