use std::fmt;
use std::str::FromStr;

/// Network the block is being assembled for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Network {
	Mainnet,
	Testnet,
	Regtest,
}

impl Default for Network {
	fn default() -> Self {
		Network::Mainnet
	}
}

impl fmt::Display for Network {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let name = match self {
			Network::Mainnet => "main",
			Network::Testnet => "test",
			Network::Regtest => "regtest",
		};
		f.write_str(name)
	}
}

impl FromStr for Network {
	type Err = String;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"main" | "mainnet" => Ok(Network::Mainnet),
			"test" | "testnet" => Ok(Network::Testnet),
			"regtest" => Ok(Network::Regtest),
			other => Err(format!("unknown network: {}", other)),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::Network;

	#[test]
	fn test_network_round_trips_through_name() {
		for network in &[Network::Mainnet, Network::Testnet, Network::Regtest] {
			assert_eq!(network.to_string().parse::<Network>().unwrap(), *network);
		}
		assert!("signet".parse::<Network>().is_err());
	}
}
