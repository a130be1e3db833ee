use anyhow::Result;
use std::fmt;
use std::str::FromStr;

/// Operating systems the download flow knows how to serve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Os {
    MacOs,
    Windows,
    Linux,
    Unknown,
}

impl fmt::Display for Os {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Os::MacOs => write!(f, "macOS"),
            Os::Windows => write!(f, "Windows"),
            Os::Linux => write!(f, "Linux"),
            Os::Unknown => write!(f, "Unknown"),
        }
    }
}

impl FromStr for Os {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "macos" | "mac" | "darwin" => Ok(Os::MacOs),
            "windows" | "win" => Ok(Os::Windows),
            "linux" => Ok(Os::Linux),
            _ => anyhow::bail!("Unknown OS: {}. Expected macos, windows, or linux.", s),
        }
    }
}

/// CPU architectures the download flow distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Arch {
    Arm64,
    X64,
    Unknown,
}

impl fmt::Display for Arch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arch::Arm64 => write!(f, "arm64"),
            Arch::X64 => write!(f, "x64"),
            Arch::Unknown => write!(f, "unknown"),
        }
    }
}

impl FromStr for Arch {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "arm64" | "aarch64" => Ok(Arch::Arm64),
            "x64" | "x86_64" | "amd64" => Ok(Arch::X64),
            _ => anyhow::bail!("Unknown architecture: {}. Expected arm64 or x64.", s),
        }
    }
}

/// The (operating system, CPU architecture) pair inferred for a visitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlatformSignature {
    pub os: Os,
    pub arch: Arch,
}

impl PlatformSignature {
    pub fn new(os: Os, arch: Arch) -> Self {
        Self { os, arch }
    }

    /// Detect the platform this binary was built for.
    pub fn detect() -> Self {
        Self {
            os: detect_os(),
            arch: detect_arch(),
        }
    }

    /// Derive a signature from a browser user-agent string.
    ///
    /// The OS checks run in order: macOS markers win over "win", which wins
    /// over the Linux markers. Everything is matched case-insensitively.
    pub fn from_user_agent(user_agent: &str) -> Self {
        let ua = user_agent.to_lowercase();

        let os = if ua.contains("mac os x") || ua.contains("macintosh") {
            Os::MacOs
        } else if ua.contains("win") {
            Os::Windows
        } else if ua.contains("linux") || ua.contains("x11") {
            Os::Linux
        } else {
            Os::Unknown
        };

        let arch = if ua.contains("arm64") || ua.contains("aarch64") {
            Arch::Arm64
        } else if ua.contains("x86_64")
            || ua.contains("x64")
            || ua.contains("amd64")
            || ua.contains("wow64")
        {
            Arch::X64
        } else {
            Arch::Unknown
        };

        Self { os, arch }
    }
}

impl fmt::Display for PlatformSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.os, self.arch)
    }
}

fn detect_os() -> Os {
    #[cfg(target_os = "macos")]
    {
        Os::MacOs
    }
    #[cfg(target_os = "linux")]
    {
        Os::Linux
    }
    #[cfg(target_os = "windows")]
    {
        Os::Windows
    }
    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        Os::Unknown
    }
}

fn detect_arch() -> Arch {
    #[cfg(target_arch = "aarch64")]
    {
        Arch::Arm64
    }
    #[cfg(target_arch = "x86_64")]
    {
        Arch::X64
    }
    #[cfg(not(any(target_arch = "aarch64", target_arch = "x86_64")))]
    {
        Arch::Unknown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_matches_build_target() {
        let signature = PlatformSignature::detect();

        #[cfg(target_os = "macos")]
        assert_eq!(signature.os, Os::MacOs);

        #[cfg(target_os = "linux")]
        assert_eq!(signature.os, Os::Linux);

        #[cfg(target_os = "windows")]
        assert_eq!(signature.os, Os::Windows);

        #[cfg(target_arch = "x86_64")]
        assert_eq!(signature.arch, Arch::X64);

        #[cfg(target_arch = "aarch64")]
        assert_eq!(signature.arch, Arch::Arm64);
    }

    #[test]
    fn test_from_user_agent_windows_x64() {
        let signature = PlatformSignature::from_user_agent(
            "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36",
        );
        assert_eq!(signature.os, Os::Windows);
        assert_eq!(signature.arch, Arch::X64);
    }

    #[test]
    fn test_from_user_agent_windows_wow64() {
        let signature =
            PlatformSignature::from_user_agent("Mozilla/5.0 (Windows NT 6.1; WOW64; rv:40.0)");
        assert_eq!(signature.os, Os::Windows);
        assert_eq!(signature.arch, Arch::X64);
    }

    #[test]
    fn test_from_user_agent_mac() {
        let signature = PlatformSignature::from_user_agent(
            "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15",
        );
        assert_eq!(signature.os, Os::MacOs);
        // Safari on Apple Silicon still reports an Intel UA without an arch
        // marker, so the architecture stays unknown here.
        assert_eq!(signature.arch, Arch::Unknown);
    }

    #[test]
    fn test_from_user_agent_mac_arm64() {
        let signature = PlatformSignature::from_user_agent("BossConsole/2.1 (Macintosh; arm64)");
        assert_eq!(signature.os, Os::MacOs);
        assert_eq!(signature.arch, Arch::Arm64);
    }

    #[test]
    fn test_from_user_agent_linux() {
        let signature = PlatformSignature::from_user_agent(
            "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36",
        );
        assert_eq!(signature.os, Os::Linux);
        assert_eq!(signature.arch, Arch::X64);
    }

    #[test]
    fn test_from_user_agent_unrecognized() {
        let signature = PlatformSignature::from_user_agent("curl/8.4.0");
        assert_eq!(signature.os, Os::Unknown);
        assert_eq!(signature.arch, Arch::Unknown);
    }

    #[test]
    fn test_from_user_agent_mac_wins_over_win_marker() {
        // "Macintosh" is checked before the bare "win" substring.
        let signature = PlatformSignature::from_user_agent("Mozilla/5.0 (Macintosh; darwin)");
        assert_eq!(signature.os, Os::MacOs);
    }

    #[test]
    fn test_os_parse() {
        assert_eq!("macos".parse::<Os>().unwrap(), Os::MacOs);
        assert_eq!("Darwin".parse::<Os>().unwrap(), Os::MacOs);
        assert_eq!("windows".parse::<Os>().unwrap(), Os::Windows);
        assert_eq!("Linux".parse::<Os>().unwrap(), Os::Linux);
        assert!("freebsd".parse::<Os>().is_err());
    }

    #[test]
    fn test_arch_parse() {
        assert_eq!("arm64".parse::<Arch>().unwrap(), Arch::Arm64);
        assert_eq!("aarch64".parse::<Arch>().unwrap(), Arch::Arm64);
        assert_eq!("x64".parse::<Arch>().unwrap(), Arch::X64);
        assert_eq!("amd64".parse::<Arch>().unwrap(), Arch::X64);
        assert!("mips".parse::<Arch>().is_err());
    }

    #[test]
    fn test_signature_display() {
        let signature = PlatformSignature::new(Os::MacOs, Arch::Arm64);
        assert_eq!(signature.to_string(), "macOS/arm64");
    }
}
